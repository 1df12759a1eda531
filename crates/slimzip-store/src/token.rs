//! Retrieval token minting.

use rand::RngCore;

/// Random bytes per token; hex encoding doubles the printed length.
const TOKEN_BYTES: usize = 32;

/// Mint a high-entropy, unguessable retrieval token.
///
/// Uniqueness per insertion is probabilistic; the store's collision check
/// on `put` is the only defense, and it is expected never to fire.
pub fn mint_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
