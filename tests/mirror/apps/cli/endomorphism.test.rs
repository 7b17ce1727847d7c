// [tests/mirror/apps/cli/endomorphism.test.rs]
/**
 * =================================================================
 * APARATO: GLV ENDOMORPHISM COMPANION TEST (V1.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-WORKER MIRROR
 * RESPONSABILIDAD: CERTIFICAR LOS SEIS COMPAÑEROS BAJO φ Y LA SIMETRÍA Y
 * =================================================================
 */

use std::path::Path;

use prospector_cli_lib::context::SearchContext;
use prospector_cli_lib::endomorphism;
use prospector_core_math::prelude::{addr33, JacobianPoint, Scalar};
use prospector_core_probabilistic::prelude::{BloomFilter, Filter, Hash160};

fn scalar_of(value: u64) -> Scalar {
    let mut bytes = [0u8; 32];
    bytes[31] = value as u8;
    Scalar::from_u256_be(bytes).unwrap()
}

#[test]
fn expand_produces_five_distinct_companions_with_recoverable_scalars() {
    println!("\n🪞 [PROVING_GROUNDS]: Auditing GLV Endomorphism Companions...");

    let k = scalar_of(11);
    let (x, y) = JacobianPoint::from_private(&k).to_affine_bytes().unwrap();

    let companions = endomorphism::expand(&x, &y);
    assert_eq!(companions.len(), 5);

    for companion in &companions {
        let recovered_scalar = (companion.recover_scalar)(&k);
        let (expected_x, expected_y) = JacobianPoint::from_private(&recovered_scalar).to_affine_bytes().unwrap();
        assert_eq!(companion.x_be, expected_x, "L1_GLV_FAULT: companion X does not match recovered scalar.");
        assert_eq!(companion.y_be, expected_y, "L1_GLV_FAULT: companion Y does not match recovered scalar.");
    }

    println!("   ✅ [SUCCESS]: All five GLV companions recover their originating scalar.");
}

#[test]
fn endo_flag_audits_companions_and_recovers_the_original_private_key() {
    // Se planta solo el compañero λk (segundo elemento de `expand`), y se
    // certifica que `check_point` con `-endo` activo reporta el escalar
    // original `k`, no `λk`, como hallazgo.
    let k = scalar_of(13);
    let (x, y) = JacobianPoint::from_private(&k).to_affine_bytes().unwrap();
    let companion = &endomorphism::expand(&x, &y)[1];
    let target = Hash160::from_bytes(addr33(&companion.x_be, &companion.y_be));

    let mut bloom = BloomFilter::new(64);
    bloom.insert(&target);
    let filter: Filter = bloom.into();
    let context = SearchContext::new(filter, true, false, true, true, Some(Path::new("/dev/null"))).unwrap();

    assert!(context.check_point(&x, &y, &k));
    assert_eq!(context.snapshot().1, 1);
}

#[test]
fn endo_disabled_does_not_audit_companion_points() {
    let k = scalar_of(13);
    let (x, y) = JacobianPoint::from_private(&k).to_affine_bytes().unwrap();
    let companion = &endomorphism::expand(&x, &y)[1];
    let target = Hash160::from_bytes(addr33(&companion.x_be, &companion.y_be));

    let mut bloom = BloomFilter::new(64);
    bloom.insert(&target);
    let filter: Filter = bloom.into();
    let context = SearchContext::new(filter, true, false, false, true, Some(Path::new("/dev/null"))).unwrap();

    assert!(!context.check_point(&x, &y, &k));
    assert_eq!(context.snapshot().1, 0);
}
