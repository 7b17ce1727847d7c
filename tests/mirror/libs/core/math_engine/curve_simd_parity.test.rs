// [tests/mirror/libs/core/math_engine/curve_simd_parity.test.rs]
/**
 * =================================================================
 * APARATO: CURVE SIMD PARITY CERTIFIER (V1.0 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: VALIDACIÓN DE ISOMORFISMO ESCALAR VS VECTORIAL
 *
 * # Mathematical Proof (Lane Independence):
 * Certifica que duplicar el punto P_i en el carril i del motor SIMD
 * produce exactamente el mismo resultado que duplicarlo individualmente
 * en el motor escalar `UnifiedCurveEngine`.
 * =================================================================
 */

use prospector_core_math::prelude::*;

#[test]
fn certify_simd_4way_doubling_parity_against_scalar_oracle() {
    println!("\n🧬 [PROVING_GROUNDS]: Initiating SIMD 4-Way Parity Audit...");

    // 1. SETUP: 4 puntos Jacobianos distintos, Z=1.
    let p0 = JacobianPoint::from_affine([1, 0, 0, 0], [2, 0, 0, 0]);
    let p1 = JacobianPoint::from_affine([3, 0, 0, 0], [4, 0, 0, 0]);
    let p2 = JacobianPoint::from_affine([5, 0, 0, 0], [6, 0, 0, 0]);
    let p3 = JacobianPoint::from_affine([7, 0, 0, 0], [8, 0, 0, 0]);

    let mut vector_unit = JacobianPointVector4::from_elements(&p0, &p1, &p2, &p3);

    // 2. EXECUTION: Duplicación Paralela (4-way SIMD)
    println!("   🧪 Phase 1: Executing 4-way Parallel Doubling (SIMD)...");
    vector_unit.double_batch_unified();

    // 3. VALIDATION: Comparación contra Oráculo Escalar
    println!("   🧪 Phase 2: Validating against Scalar Oracle...");
    let scalar_oracle_results = [
        UnifiedCurveEngine::double_point_jacobian(&p0),
        UnifiedCurveEngine::double_point_jacobian(&p1),
        UnifiedCurveEngine::double_point_jacobian(&p2),
        UnifiedCurveEngine::double_point_jacobian(&p3),
    ];

    for (lane, oracle_point) in scalar_oracle_results.iter().enumerate() {
        let simd_extracted = vector_unit.x.extract_and_reduce_lane(lane);
        assert_eq!(simd_extracted, oracle_point.x, "❌ Lane {}: bit drift detected.", lane);
        println!("      ✅ Lane {}: Parity Confirmed.", lane);
    }

    println!("   ✅ [SUCCESS]: SIMD isomorphism certified bit-perfect across all lanes.");
}
