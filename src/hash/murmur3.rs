//! MurmurHash3 x86 32-bit

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Compute the 32-bit MurmurHash3 of `data` with the given seed
///
/// Blocks are read little-endian regardless of host byte order, so the
/// digest is identical on every platform.
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut h1 = seed;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let k1 = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let k1 = tail
            .iter()
            .rev()
            .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte));
        h1 ^= mix_k1(k1);
    }

    // Length is mixed in modulo 2^32
    #[allow(clippy::cast_possible_truncation)]
    let len = data.len() as u32;
    fmix32(h1 ^ len)
}

#[inline]
const fn mix_k1(k1: u32) -> u32 {
    k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline]
const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(murmur3_32(b"", 0), 0);
        assert_eq!(murmur3_32(b"", 1), 0x514e_28b7);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            murmur3_32(b"The quick brown fox jumps over the lazy dog", 0),
            0x2e4f_f723
        );
        assert_eq!(murmur3_32(b"hello", 0), 613_153_351);
    }

    #[test]
    fn test_tail_lengths() {
        // 3-byte tail, exact block, and 1-byte tail after a block
        assert_eq!(murmur3_32(b"abc", 0) as i32, -1_277_324_294);
        assert_eq!(murmur3_32(b"abcd", 0), 1_139_631_978);
        assert_eq!(murmur3_32(b"Hello, world!", 0) as i32, -1_070_186_941);
    }

    #[test]
    fn test_seed_changes_digest() {
        assert_ne!(murmur3_32(b"hello", 0), murmur3_32(b"hello", 1));
    }
}
