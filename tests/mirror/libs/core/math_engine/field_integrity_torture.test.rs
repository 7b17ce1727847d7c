// [tests/mirror/libs/core/math_engine/field_integrity_torture.test.rs]
/*!
 * =================================================================
 * APARATO: FIELD INTEGRITY TORTURE TEST (V18.5 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MATH
 * RESPONSABILIDAD: CERTIFICACIÓN DE MOTORES MONTGOMERY Y BATCH
 *
 * # Mathematical Proof (Montgomery REDC Isomorphism):
 * Se certifica que el producto en el dominio Montgomery, transformado
 * mediante la función REDC, es congruente con la aritmética directa:
 * (A_field * B_field) mod p ≡ multiply_modular(A, B) encadenada 50,000 veces.
 * =================================================================
 */

use prospector_core_math::prelude::*;
use std::time::Instant;

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * Ejecuta el protocolo de tortura sobre el motor de campo, encadenando
     * multiplicaciones Montgomery y validando la inversión por lotes.
     */
    #[test]
    fn certify_montgomery_and_batch_integrity_v18_5() {
        println!("\n💠 [INICIO]: Iniciando Tortura del Motor de Campo...");
        let start_suite_instant = Instant::now();

        // 1. FASE: MONTGOMERY ROUNDTRIP (Symmetry Check)
        println!("   🧪 Fase 1: Verificando simetría de transformación Montgomery...");
        let original_scalar_value = FieldElement::from_u64(0xABCDEF1234567890);
        let montgomery_domain_element = original_scalar_value.to_montgomery_domain();
        let restored_scalar_value = montgomery_domain_element.from_montgomery_domain();
        assert_eq!(original_scalar_value, restored_scalar_value, "L1_FIELD_FAULT: Montgomery roundtrip drift.");

        // 2. FASE: MULTIPLICACIÓN ENCADENADA (Stress 50k)
        println!("   🧪 Fase 2: Encadenando multiplicaciones Montgomery (50k iteraciones)...");
        let mut operand_alpha = FieldElement::from_u64(0x123456789ABCDEF);
        let operand_beta = FieldElement::from_u64(0xFEDCBA987654321);

        let performance_benchmark_start = Instant::now();
        for _ in 0..50_000 {
            let direct_product = operand_alpha.multiply_modular(&operand_beta);

            let alpha_montgomery = operand_alpha.to_montgomery_domain();
            let beta_montgomery = operand_beta.to_montgomery_domain();
            let montgomery_product = alpha_montgomery.multiply_modular_montgomery(&beta_montgomery).from_montgomery_domain();

            assert_eq!(direct_product, montgomery_product, "L1_FIELD_FAULT: Montgomery REDC diverges from direct multiplication.");
            operand_alpha = montgomery_product;
        }
        let throughput_ops_per_second = 50_000.0 / performance_benchmark_start.elapsed().as_secs_f64();
        println!("      ✅ Multiplicación REDC: Bit-Perfect Parity. {:.2} ops/seg.", throughput_ops_per_second);

        // 3. FASE: BATCH INVERSION (Truco de Montgomery)
        println!("   🧪 Fase 3: Certificando Inversión por Lotes (1024 unidades)...");
        let mut elements_to_invert = vec![FieldElement::default(); 1024];
        for index in 0..1024 {
            elements_to_invert[index] = FieldElement::from_u64(index as u64 + 1);
        }

        let mut inversion_results = vec![FieldElement::default(); 1024];
        let mut arithmetic_scratch = vec![FieldElement::default(); 1024];

        FieldElement::batch_invert_into(&elements_to_invert, &mut inversion_results, &mut arithmetic_scratch)
            .expect("L1_FIELD_FAULT: batch inversion rejected a non-zero magazine.");

        let target_test_index = 777;
        let product_check = elements_to_invert[target_test_index].multiply_modular(&inversion_results[target_test_index]);
        assert_eq!(product_check, FieldElement::from_u64(1), "L1_FIELD_FAULT: batch inverse does not converge to identity.");
        println!("      ✅ Montgomery Batch Trick: OK.");

        println!("\n🏁 [INFORME]: Auditoría finalizada en {:?}.", start_suite_instant.elapsed());
    }
}
