// [tests/mirror/libs/core/math_engine/hub_coherence.test.rs]
/**
 * =================================================================
 * APARATO: MASTER HUB COHERENCE TEST (V1.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: CERTIFICACIÓN DE ENLACE Y VISIBILIDAD DE ESTRATOS
 * =================================================================
 */

use prospector_core_math::prelude::*;

#[test]
fn certify_prelude_nominal_completeness() {
    println!("\n🔍 [PROVING_GROUNDS]: Auditing Master Hub Coherence...");

    // 1. TEST: Visibilidad de la Tabla Cuántica (derivación de k=1 -> G)
    let table_point = GENERATOR_TABLE.multiply(&[1, 0, 0, 0]);
    assert!(!table_point.is_infinity, "L1_HUB_FAULT: Generator Table failed to derive a finite point.");
    println!("   ✅ Stratum: generator_table is visible and operational.");

    // 2. TEST: Visibilidad de Aritmética Nominal
    let mut buffer = [0u8; 32];
    let result = add_u64_to_u256_be(&mut buffer, 1);
    assert!(result.is_ok());
    assert_eq!(buffer[31], 1);
    println!("   ✅ Stratum: arithmetic _be methods are exposed.");

    // 3. TEST: Silicon Awareness Handshake
    let _ = is_optimized_arithmetic_supported();
    let _ = is_simd_accelerated_execution_supported();
    println!("   ✅ Stratum: hardware detection strata is operational.");

    println!("   ✅ [SUCCESS]: Master Hub Prelude is synchronized and level.");
}
