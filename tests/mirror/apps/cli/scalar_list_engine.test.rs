// [tests/mirror/apps/cli/scalar_list_engine.test.rs]
/**
 * =================================================================
 * APARATO: SCALAR LIST ENGINE MIRROR TEST (V1.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-WORKER MIRROR
 * RESPONSABILIDAD: CERTIFICAR EL MOTOR `mul` DE EXTREMO A EXTREMO
 * =================================================================
 */

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use prospector_cli_lib::context::SearchContext;
use prospector_cli_lib::engine::mul;
use prospector_core_math::prelude::{addr33, JacobianPoint, Scalar};
use prospector_core_probabilistic::prelude::{BloomFilter, Filter, Hash160};

#[test]
fn mul_engine_recovers_a_planted_scalar_from_hex_lines() {
    println!("\n✖️  [PROVING_GROUNDS]: Auditing Scalar List Engine (hex mode)...");

    let mut planted_bytes = [0u8; 32];
    planted_bytes[31] = 0x99;
    let planted = Scalar::from_u256_be(planted_bytes).unwrap();
    let (x, y) = JacobianPoint::from_private(&planted).to_affine_bytes().unwrap();
    let target = Hash160::from_bytes(addr33(&x, &y));

    let mut bloom = BloomFilter::new(64);
    bloom.insert(&target);
    let filter: Filter = bloom.into();
    let context = Arc::new(
        SearchContext::new(filter, true, false, false, true, Some(Path::new("/dev/null"))).unwrap(),
    );

    let input = Cursor::new(b"99\ndeadbeef\n1\n".to_vec());
    mul::run(Arc::clone(&context), input, false, 3);

    let (checked, found) = context.snapshot();
    assert_eq!(found, 1, "L1_MUL_FAULT: planted scalar was not recovered.");
    assert_eq!(checked, 3);

    println!("   ✅ [SUCCESS]: Scalar list engine recovered the planted key under hex mode.");
}

#[test]
fn mul_engine_raw_mode_hashes_each_line_through_sha256_before_deriving_a_key() {
    let filter: Filter = BloomFilter::new(64).into();
    let context = Arc::new(
        SearchContext::new(filter, true, true, false, true, Some(Path::new("/dev/null"))).unwrap(),
    );

    let input = Cursor::new(b"correct horse battery staple\nanother candidate phrase\n".to_vec());
    mul::run(Arc::clone(&context), input, true, 2);

    // Ninguna frase está en el filtro, pero ambas líneas deben procesarse.
    assert_eq!(context.snapshot(), (2, 0));
}

#[test]
fn mul_engine_skips_blank_lines_without_crashing() {
    let filter: Filter = BloomFilter::new(16).into();
    let context = Arc::new(
        SearchContext::new(filter, true, false, false, true, Some(Path::new("/dev/null"))).unwrap(),
    );

    let input = Cursor::new(b"\n   \n1\n".to_vec());
    mul::run(Arc::clone(&context), input, false, 1);

    assert_eq!(context.snapshot().0, 1);
}
