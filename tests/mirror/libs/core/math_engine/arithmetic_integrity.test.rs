// [tests/mirror/libs/core/math_engine/arithmetic_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR ARITMÉTICO SOBERANO (V121.0 - NOMINAL SYNC)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CORE-MIRROR
 * RESPONSABILIDAD: CERTIFICACIÓN DE ACARREOS PARALELOS Y CONVERSIÓN
 *
 * # Mathematical Proof (U256 Carry Propagation):
 * El test garantiza que el acarreo generado en el bit 63 se propague
 * correctamente a través de los 4 registros de 64 bits, y que el motor
 * rechace el desbordamiento de 256 bits en la frontera superior.
 * =================================================================
 */

use prospector_core_math::prelude::*;
use std::time::Instant;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certify_u256_arithmetic_integrity_v121() {
        println!("\n🔢 [INICIO]: Iniciando Auditoría de Kernel Aritmético...");

        // 1. FASE DE HARDWARE (Silicon Awareness)
        println!("   🧪 Fase 1: Detectando soporte de optimización ADX/BMI2...");
        let _ = is_optimized_arithmetic_supported();

        // 2. FASE DE CONVERSIÓN
        println!("   🧪 Fase 2: Validando paridad de convert_u128_to_u256_be...");
        let test_value_u128: u128 = 0xDEADC0DEBAADF00D1337BEEFCAFEBABE;
        let buffer_u256 = convert_u128_to_u256_be(test_value_u128);
        assert_eq!(&buffer_u256[16..32], &test_value_u128.to_be_bytes(), "L1_MATH_FAULT: low limb drift.");
        assert_eq!(&buffer_u256[0..16], &[0u8; 16], "L1_MATH_FAULT: high limb should be zero-padded.");

        // 3. FASE DE ACARREO (Boundary overflow)
        println!("   🧪 Fase 3: Verificando propagación de acarreo U256...");
        let mut limit_buffer = [0xFFu8; 32];
        let overflow_result = add_u64_to_u256_be(&mut limit_buffer, 1);
        assert!(overflow_result.is_err(), "L1_MATH_FAULT: el motor no detectó el overflow de 256 bits.");

        // 4. BENCHMARK DE RENDIMIENTO (Stress 5M)
        println!("   🚀 Fase 4: Ejecutando stress-test de 5,000,000 incrementos...");
        let mut stress_buffer = [0u8; 32];
        let bench_start = Instant::now();
        for _ in 0..5_000_000 {
            let _ = add_u64_to_u256_be(&mut stress_buffer, 1);
        }
        let ops_per_sec = 5_000_000.0 / bench_start.elapsed().as_secs_f64();
        println!("      🚀 Throughput: {:.2} M-ops/seg.", ops_per_sec / 1_000_000.0);

        println!("\n🏁 [INFORME]: Auditoría finalizada.");
    }
}
