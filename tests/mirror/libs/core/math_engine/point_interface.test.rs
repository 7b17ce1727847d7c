// [tests/mirror/libs/core/math_engine/point_interface.test.rs]
/**
 * =================================================================
 * APARATO: POINT INTERFACE CERTIFIER (V1.0 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE
 * OBJETIVO: Certificar la paridad de `from_private` contra el oráculo
 *           genérico `multiply_scalar` sobre el punto base G.
 * =================================================================
 */

use prospector_core_math::prelude::*;

const G_X: [u64; 4] = [0x59F2815B16F81798, 0x029BFCDB2DCE28D9, 0x55A06295CE870B07, 0x79BE667EF9DCBBAC];
const G_Y: [u64; 4] = [0x9C47D08FFB10D4B8, 0xFD17B448A6855419, 0x5DA4FBFC0E1108A8, 0x483ADA7726A3C465];

#[test]
fn certify_from_private_interface_and_window_parity() {
    println!("\n📐 [PROVING_GROUNDS]: Auditing JacobianPoint Public Interface...");

    // 1. SETUP: Escalar k=1 (Punto G)
    let mut scalar_one_bytes = [0u8; 32];
    scalar_one_bytes[31] = 1;
    let scalar_one = Scalar::from_u256_be(scalar_one_bytes).unwrap();

    // 2. EXECUTION: derivación vía tabla de ventana (`from_private`) contra
    // el oráculo de doble-y-suma (`multiply_scalar`) aplicado a G.
    let point_via_table = JacobianPoint::from_private(&scalar_one);
    let generator = JacobianPoint::from_affine(G_X, G_Y);
    let point_via_generic = generator.multiply_scalar(&scalar_one);

    // 3. VALIDATION: Paridad interna
    assert_eq!(point_via_table.x, point_via_generic.x, "L1_INTERFACE_FAULT: Method drift.");
    assert!(!point_via_table.is_infinity);

    println!("   ✅ [SUCCESS]: 'from_private' is synced with the generic windowed engine.");
}
