//! Stable player identities derived from session credentials.

/// Stable 64-bit numeric handle for a player.
pub type PlayerId = u64;

/// The identity of sessions that presented no credential. Every backend's
/// save path rejects it.
pub const ANONYMOUS_PLAYER: PlayerId = 0;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x100_0000_01b3;

/// Derive a player identity from the canonical byte encoding of a session
/// credential (in practice, the SSH public key presented at auth time).
///
/// FNV-1a, 64-bit. Identical bytes always yield the identical identity;
/// collisions between different credentials are possible and accepted.
/// The algorithm is pinned: changing it would orphan every previously
/// persisted record.
#[must_use]
pub fn derive_player_id(credential: &[u8]) -> PlayerId {
    credential.iter().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}
