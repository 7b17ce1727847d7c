// [tests/mirror/libs/core/math_engine/scalar_modular_logic.test.rs]
/**
 * =================================================================
 * APARATO: SCALAR MODULAR LOGIC TEST (V1.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE
 * RESPONSABILIDAD: CERTIFICAR REDUCCIÓN MOD N EN LA FRONTERA DEL ORDEN
 * =================================================================
 */

use prospector_core_math::prelude::*;
use prospector_core_math::scalar::SECP256K1_CURVE_ORDER_N;

#[test]
fn certify_scalar_reduction_at_order_boundary() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing Scalar Modular Strata...");

    // 1. SETUP: Valor igual al orden N
    let n_bytes = convert_limbs_u64_to_u256_be(&SECP256K1_CURVE_ORDER_N);

    // 2. EXECUTION: N mod N colapsa a cero, y el motor lo rechaza por seguridad.
    let result_at_n = Scalar::from_u256_be(n_bytes);
    assert!(result_at_n.is_err(), "L1_SCALAR_FAULT: Order N must collapse to a rejected zero point.");

    // 3. EXECUTION: N + 1 mod N debe ser 1
    let mut n_plus_one_bytes = n_bytes;
    n_plus_one_bytes[31] = n_plus_one_bytes[31].wrapping_add(1);
    let result_plus_one = Scalar::from_u256_be(n_plus_one_bytes).unwrap();
    assert_eq!(result_plus_one.to_u256_be()[31], 1, "L1_SCALAR_FAULT: Modular reduction drift.");

    println!("   ✅ [SUCCESS]: Scalar naming and reduction certified.");
}
