// [tests/mirror/libs/core/probabilistic/bloom_filter_reliability.test.rs]
// Certifica la tasa de falso positivo y la ausencia de falsos negativos del
// filtro de Bloom de 20 funciones hash.

use prospector_core_probabilistic::{BloomFilter, Hash160};

fn digest(seed: u32) -> Hash160 {
    let mut bytes = [0u8; 20];
    bytes[0..4].copy_from_slice(&seed.to_be_bytes());
    bytes[16..20].copy_from_slice(&seed.wrapping_mul(2_654_435_761).to_be_bytes());
    Hash160::from_bytes(bytes)
}

#[test]
fn no_false_negatives_over_ten_thousand_insertions() {
    let mut filter = BloomFilter::new(BloomFilter::recommended_size_words(10_000, 1e-7));
    let inserted: Vec<Hash160> = (0..10_000u32).map(digest).collect();
    for entry in &inserted {
        filter.insert(entry);
    }
    for entry in &inserted {
        assert!(filter.query(entry), "false negative for a known-inserted digest");
    }
}

#[test]
fn false_positive_rate_stays_within_an_order_of_magnitude_of_target() {
    let target_fp_rate = 1e-4;
    let mut filter = BloomFilter::new(BloomFilter::recommended_size_words(5_000, target_fp_rate));
    for seed in 0..5_000u32 {
        filter.insert(&digest(seed));
    }

    let mut false_positives = 0usize;
    let probe_count = 20_000u32;
    for seed in 5_000..(5_000 + probe_count) {
        if filter.query(&digest(seed)) {
            false_positives += 1;
        }
    }

    let observed_rate = f64::from(false_positives as u32) / f64::from(probe_count);
    assert!(
        observed_rate < target_fp_rate * 10.0,
        "observed FP rate {observed_rate} exceeds ten times the target {target_fp_rate}"
    );
}
