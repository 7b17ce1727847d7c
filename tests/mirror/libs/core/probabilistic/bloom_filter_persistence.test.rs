// [tests/mirror/libs/core/probabilistic/bloom_filter_persistence.test.rs]
// Certifica el formato binario ECBF: round-trip a disco y rechazo de
// artefactos ajenos o con versión desconocida.

use prospector_core_probabilistic::{BloomFilter, FilterError, Hash160};
use std::io::Write;

fn digest(byte: u8) -> Hash160 {
    let mut bytes = [0u8; 20];
    bytes[0] = byte;
    Hash160::from_bytes(bytes)
}

#[test]
fn persisted_filter_round_trips_bit_for_bit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reserve.blf");

    let mut original = BloomFilter::new(128);
    for seed in 0..64u8 {
        original.insert(&digest(seed));
    }
    original.save_to_disk(&path).unwrap();

    let loaded = BloomFilter::load_from_disk(&path).unwrap();
    assert_eq!(loaded.size_words(), original.size_words());
    for seed in 0..64u8 {
        assert!(loaded.query(&digest(seed)));
    }
}

#[test]
fn header_magic_is_the_ecbf_fourcc() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header.blf");
    BloomFilter::new(4).save_to_disk(&path).unwrap();

    let raw = std::fs::read(&path).unwrap();
    assert_eq!(&raw[0..4], &[0x46, 0x42, 0x43, 0x45]); // "ECBF" little-endian bytes of 0x45434246
}

#[test]
fn unsupported_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.blf");

    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&0x4543_4246u32.to_le_bytes()).unwrap();
    file.write_all(&[99u8]).unwrap();
    file.write_all(&1u64.to_le_bytes()).unwrap();
    file.write_all(&0u64.to_le_bytes()).unwrap();

    assert!(matches!(BloomFilter::load_from_disk(&path), Err(FilterError::UnsupportedVersion(99))));
}
