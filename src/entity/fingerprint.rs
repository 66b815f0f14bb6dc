//! Stable content fingerprints for entity state.
//!
//! State is fed through its `Hash` impl into a SHA-256 digest and the first
//! eight bytes are kept. Integers are written little-endian so fingerprints
//! match across platforms.

use std::hash::{Hash, Hasher};

use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Default)]
pub struct StateHasher(Sha256);

impl Hasher for StateHasher {
    fn finish(&self) -> u64 {
        let digest = self.0.clone().finalize();
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(head)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    fn write_u16(&mut self, n: u16) {
        self.write(&n.to_le_bytes());
    }

    fn write_u32(&mut self, n: u32) {
        self.write(&n.to_le_bytes());
    }

    fn write_u64(&mut self, n: u64) {
        self.write(&n.to_le_bytes());
    }

    fn write_usize(&mut self, n: usize) {
        self.write(&(n as u64).to_le_bytes());
    }

    fn write_i32(&mut self, n: i32) {
        self.write(&n.to_le_bytes());
    }
}

pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = StateHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Fingerprint of an ordered list of child fingerprints.
pub fn combine<I>(tag: &str, parts: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut hasher = StateHasher::default();
    tag.hash(&mut hasher);
    for part in parts {
        part.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_head_of_the_sha256_digest() {
        let mut hasher = StateHasher::default();
        hasher.write(b"abc");
        // sha256("abc") = ba7816bf 8f01cfea ...
        let head = [0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea];
        assert_eq!(hasher.finish(), u64::from_le_bytes(head));
    }

    #[test]
    fn equal_values_have_equal_fingerprints() {
        assert_eq!(fingerprint(&(1u16, "ship")), fingerprint(&(1u16, "ship")));
        assert_ne!(fingerprint(&(1u16, "ship")), fingerprint(&(2u16, "ship")));
    }

    #[test]
    fn child_order_matters() {
        assert_ne!(combine("fleet", [1, 2]), combine("fleet", [2, 1]));
        assert_eq!(combine("fleet", [1, 2]), combine("fleet", [1, 2]));
    }
}
