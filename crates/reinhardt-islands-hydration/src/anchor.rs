//! Content-derived anchor ids.
//!
//! The anchor id links server markup to its bootstrap script. It is derived
//! from the markup alone, so identical markup always gets the same id.

use sha2::{Digest, Sha256};

/// Derives an anchor id of `length` hex characters from `html`.
///
/// `length` is capped at the digest size (64 characters).
pub fn anchor_id(html: &str, length: usize) -> String {
	let digest = hex::encode(Sha256::digest(html.as_bytes()));
	let length = length.min(digest.len());
	digest[..length].to_string()
}
