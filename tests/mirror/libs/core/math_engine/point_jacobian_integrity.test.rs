// [tests/mirror/libs/core/math_engine/point_jacobian_integrity.test.rs]
/**
 * =================================================================
 * APARATO: CERTIFICADOR DE PUNTOS GEOMÉTRICOS (V48.2 - ELITE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CORE
 * OBJETIVO: Validación de Proyección Afín y Singularidad del Infinito
 * =================================================================
 */

use prospector_core_math::prelude::*;
use std::time::Instant;

const G_X: [u64; 4] = [0x59F2815B16F81798, 0x029BFCDB2DCE28D9, 0x55A06295CE870B07, 0x79BE667EF9DCBBAC];
const G_Y: [u64; 4] = [0x9C47D08FFB10D4B8, 0xFD17B448A6855419, 0x5DA4FBFC0E1108A8, 0x483ADA7726A3C465];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certificar_proyeccion_y_simetria_puntos() {
        println!("\n🌐 [INICIO]: Auditoría de Proyección Jacobiana...");
        let start_suite = Instant::now();

        // 1. PRUEBA DE IDENTIDAD AFÍN (Roundtrip Check)
        println!("   🧪 Verificando Roundtrip Afín -> Jacobiano -> Afín...");
        let punto_jacobian = JacobianPoint::from_affine(G_X, G_Y);
        let (res_x, res_y) = punto_jacobian.to_affine_bytes().expect("ERROR_PROYECCIÓN_AFÍN_GÉNESIS");

        let esperado_x = convert_limbs_u64_to_u256_be(&G_X);
        let esperado_y = convert_limbs_u64_to_u256_be(&G_Y);
        assert_eq!(res_x, esperado_x, "❌ FALLO: discrepancia en X reconstruido.");
        assert_eq!(res_y, esperado_y, "❌ FALLO: discrepancia en Y reconstruido.");
        println!("   ✅ Simetría afín certificada bit-perfect.");

        // 2. PRUEBA DE ESTRATO AL INFINITO (Neutral Point)
        println!("   🧪 Verificando integridad del Punto al Infinito...");
        let infinity = JacobianPoint::infinity();
        assert!(infinity.is_infinity && infinity.to_affine_bytes().is_err(), "❌ FALLO: singularidad mal comportada.");
        println!("   ✅ Comportamiento de singularidad (Infinity) validado.");

        // 3. PRUEBA DE RENDIMIENTO (Projection Benchmark)
        println!("   🚀 Ejecutando ráfaga de 10,000 proyecciones afines...");
        let start_perf = Instant::now();
        for _ in 0..10_000 {
            let _ = punto_jacobian.to_affine_bytes();
        }
        let ops_per_sec = 10_000.0 / start_perf.elapsed().as_secs_f64();
        println!("   ✅ Throughput de Proyección: {:.2} ops/seg.", ops_per_sec);

        println!("🏁 Auditoría finalizada en {:?}.", start_suite.elapsed());
    }
}
