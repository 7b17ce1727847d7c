// [tests/mirror/libs/core/math_engine/field_simd_isomorphism.test.rs]
/**
 * =================================================================
 * APARATO: FIELD SIMD ISOMORPHISM TEST (V1.0 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE
 * OBJETIVO: Certificar paridad entre el backend AVX2 y el de emulación.
 * =================================================================
 */

use prospector_core_math::prelude::*;

#[test]
fn certify_field_simd_isomorphism_across_lanes() {
    println!("\n🧬 [PROVING_GROUNDS]: Auditing Field SIMD Isomorphism...");

    // 1. SETUP: 4 elementos de campo distintos
    let e0 = FieldElement::from_u64(0xDEADBEEF);
    let e1 = FieldElement::from_u64(0xCAFEBABE);
    let e2 = FieldElement::from_u64(0x1337_1337);
    let e3 = FieldElement::from_u64(0x4242_4242);

    let vector = FieldElementVector4::from_elements(&e0, &e1, &e2, &e3);

    // 2. EXECUTION: Adición consigo mismo (2 * E). El backend AVX2 expone
    // esta operación como `unsafe`; el backend de emulación no, por lo que
    // el bloque `unsafe` cubre ambos sin requerir un `cfg` separado aquí.
    let result_vector = unsafe { vector.add_modular_vectorized(&vector) };

    // 3. VALIDATION: Comparación contra oráculo escalar
    let oracle = [e0.add_modular(&e0), e1.add_modular(&e1), e2.add_modular(&e2), e3.add_modular(&e3)];
    for (lane, expected) in oracle.iter().enumerate() {
        let extracted = result_vector.extract_and_reduce_lane(lane);
        assert_eq!(extracted, *expected, "L1_SIMD_FAULT: Lane {} drift detected.", lane);
    }

    println!("   ✅ [SUCCESS]: Field SIMD isomorphism certified bit-perfect.");
}
