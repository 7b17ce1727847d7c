// [tests/mirror/libs/core/math_engine/field_integrity.test.rs]
/**
 * =================================================================
 * APARATO: FIELD ELEMENT INTEGRITY TEST (V1.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: CERTIFICAR LA ARITMÉTICA BÁSICA DE FieldElement
 * =================================================================
 */

use prospector_core_math::prelude::*;

#[test]
fn certify_field_element_roundtrip_and_arithmetic() {
    println!("\n⚖️  [PROVING_GROUNDS]: Auditing FieldElement baseline strata...");

    // 1. Roundtrip Big-Endian
    let bytes = [0xAAu8; 32];
    let element = FieldElement::from_bytes_be(&bytes);
    assert_eq!(element.internal_words_to_be_bytes(), bytes, "L1_FIELD_FAULT: Big-Endian roundtrip failed.");

    // 2. Suma y resta son inversas
    let a = FieldElement::from_u64(0xDEADBEEF);
    let b = FieldElement::from_u64(0xCAFEBABE);
    let sum = a.add_modular(&b);
    assert_eq!(sum.subtract_modular(&b), a, "L1_FIELD_FAULT: add/subtract are not inverses.");

    // 3. Multiplicación por cero es cero
    assert!(a.multiply_modular(&FieldElement::from_u64(0)).is_zero());

    println!("   ✅ [SUCCESS]: FieldElement baseline arithmetic certified.");
}
