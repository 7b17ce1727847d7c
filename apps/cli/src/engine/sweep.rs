// [apps/cli/src/engine/sweep.rs]
/*!
 * =================================================================
 * APARATO: RANGE SWEEP ENGINE (SHELL)
 * RESPONSABILIDAD: BARRIDO POR LOTES CON AVANCE ADD-STRIDE (`add`)
 *
 * Puerto de `ctx_precompute_gpoints`/`batch_add`/`cmd_add_worker` de la
 * fuente. La tabla de puntos precomputados `gpoints[0..GROUP)` contiene
 * los múltiplos `1·stride·G, 2·stride·G, …, GROUP·stride·G` en afín; cada
 * iteración del bucle caliente calcula, con una única inversión por lote,
 * el punto `ancla + i·stride·G` para cada `i` usando la fórmula de la
 * cuerda/pendiente afín, y desplaza el ancla al último punto calculado
 * del lote antes de continuar.
 *
 * A diferencia de la fuente (que reduce cada entrada de `gpoints` a afín
 * una por una durante el precómputo), aquí se deja la reducción una por
 * una tal cual: el precómputo ocurre una sola vez por invocación de `add`,
 * así que no está en el camino caliente y no justifica la complejidad de
 * un lote adicional.
 * =================================================================
 */

use std::sync::Mutex;
use std::thread;

use prospector_core_math::prelude::{FieldElement, JacobianPoint, MathError, Scalar, UnifiedCurveEngine};

use crate::context::SearchContext;
use crate::engine::AffinePoint;
use crate::range::{GROUP_SIZE, MAX_JOB_SIZE};

/// Construye la tabla `gpoints[0..GROUP)` de múltiplos de `stride_k · G`,
/// cada entrada ya reducida a afín. Visible al resto de `engine` para que
/// `rnd` pueda construirla una sola vez por invocación y reutilizarla a
/// través de `run_over_table`, en vez de reconstruirla en cada sub-rango.
pub(crate) fn build_gpoints_table(stride_k: &Scalar) -> Result<Vec<AffinePoint>, MathError> {
    let group_size = GROUP_SIZE as usize;
    let mut points = Vec::with_capacity(group_size);

    let g1_jacobian = JacobianPoint::from_private(stride_k);
    let (g1_x, g1_y) = g1_jacobian.to_affine_bytes()?;
    let g1 = AffinePoint {
        x: FieldElement::from_bytes_be(&g1_x),
        y: FieldElement::from_bytes_be(&g1_y),
    };
    points.push(g1);

    if group_size > 1 {
        let g2_jacobian = g1_jacobian.double_deterministic();
        let (g2_x, g2_y) = g2_jacobian.to_affine_bytes()?;
        points.push(AffinePoint {
            x: FieldElement::from_bytes_be(&g2_x),
            y: FieldElement::from_bytes_be(&g2_y),
        });
    }

    for _ in 2..group_size {
        let previous = points[points.len() - 1];
        let previous_jacobian = JacobianPoint::from_affine(previous.x.internal_words, previous.y.internal_words);
        let sum_jacobian = UnifiedCurveEngine::add_mixed_deterministic(&previous_jacobian, &g1.x, &g1.y);
        let (sum_x, sum_y) = sum_jacobian.to_affine_bytes()?;
        points.push(AffinePoint {
            x: FieldElement::from_bytes_be(&sum_x),
            y: FieldElement::from_bytes_be(&sum_y),
        });
    }

    Ok(points)
}

/// Ejecuta una unidad de trabajo de `iterations` comprobaciones, arrancando
/// en la llave privada `start_key`, avanzando de a `stride_k` por paso.
fn run_job(
    context: &SearchContext,
    gpoints: &[AffinePoint],
    stride_k: &Scalar,
    start_key: &Scalar,
    iterations: u64,
) -> Result<(), MathError> {
    let group_size = gpoints.len();
    let mut ck = *start_key;
    let mut remaining = iterations;

    let start_jacobian = JacobianPoint::from_private(&ck);
    let (start_x, start_y) = start_jacobian.to_affine_bytes()?;
    let mut anchor = AffinePoint {
        x: FieldElement::from_bytes_be(&start_x),
        y: FieldElement::from_bytes_be(&start_y),
    };

    // El ancla inicial es `start_key` mismo (j=0 del rango semi-abierto
    // `[range_s, range_e)`). La tabla `gpoints` sólo produce desplazamientos
    // `1..=group_size` respecto al ancla vigente, así que j=0 debe
    // comprobarse aquí explícitamente o nunca se comprueba.
    context.check_point(&start_x, &start_y, &ck);
    context.record_checked(1);
    remaining -= 1;

    let mut dx = vec![FieldElement::from_u64(0); group_size];
    let mut dx_inv = vec![FieldElement::from_u64(0); group_size];
    let mut scratch = vec![FieldElement::from_u64(0); group_size];

    while remaining > 0 {
        if context.should_stop() {
            break;
        }

        let batch_size = remaining.min(group_size as u64) as usize;

        for i in 0..batch_size {
            dx[i] = gpoints[i].x.subtract_modular(&anchor.x);
        }
        FieldElement::batch_invert_into(&dx[..batch_size], &mut dx_inv[..batch_size], &mut scratch[..batch_size])?;

        let mut last_point = anchor;
        let mut last_key = ck;
        for i in 0..batch_size {
            let slope = gpoints[i].y.subtract_modular(&anchor.y).multiply_modular(&dx_inv[i]);
            let result_x = slope.square_modular().subtract_modular(&anchor.x).subtract_modular(&gpoints[i].x);
            let result_y = slope.multiply_modular(&anchor.x.subtract_modular(&result_x)).subtract_modular(&anchor.y);

            let candidate_key = ck.add_stride(stride_k, (i + 1) as u64);
            let candidate_x = result_x.internal_words_to_be_bytes();
            let candidate_y = result_y.internal_words_to_be_bytes();
            context.check_point(&candidate_x, &candidate_y, &candidate_key);

            last_point = AffinePoint { x: result_x, y: result_y };
            last_key = candidate_key;
        }

        context.record_checked(batch_size as u64);
        anchor = last_point;
        ck = last_key;
        remaining -= batch_size as u64;
    }

    Ok(())
}

/// Resta `range_e - key`, devolviendo `None` si la diferencia no cabe en
/// un `u64` (el trabajo restante se acota entonces a `MAX_JOB_SIZE`).
fn remaining_span(range_e: &Scalar, key: &Scalar) -> Option<u64> {
    let diff = range_e.sub_mod_n(key);
    let limbs = diff.private_scalar_limbs;
    if limbs[1] == 0 && limbs[2] == 0 && limbs[3] == 0 {
        Some(limbs[0])
    } else {
        None
    }
}

/// Ejecuta el barrido de rango `[range_s, range_e)` con avance `stride_k`,
/// repartiendo unidades de trabajo desde un cursor compartido entre
/// `thread_count` hilos de trabajo, hasta agotar el rango o recibir la
/// señal de parada.
pub fn run(
    context: &SearchContext,
    range_s: Scalar,
    range_e: Scalar,
    stride_k: Scalar,
    thread_count: usize,
) -> Result<(), MathError> {
    let gpoints = build_gpoints_table(&stride_k)?;
    run_over_table(context, &gpoints, range_s, range_e, stride_k, thread_count);
    Ok(())
}

/// Variante de `run` que reutiliza una tabla `gpoints` ya construida, usada
/// por el motor `rnd` para no reconstruirla en cada sub-rango muestreado
/// (el paso `stride_k` se mantiene fijo durante toda la ejecución de `rnd`).
pub fn run_over_table(
    context: &SearchContext,
    gpoints: &[AffinePoint],
    range_s: Scalar,
    range_e: Scalar,
    stride_k: Scalar,
    thread_count: usize,
) {
    let cursor = Mutex::new(range_s);

    thread::scope(|scope| {
        for _ in 0..thread_count.max(1) {
            scope.spawn(|| {
                loop {
                    if context.should_stop() {
                        return;
                    }

                    let (pk, iterations) = {
                        let mut guard = cursor.lock().expect("cursor de barrido envenenado");
                        if guard.to_u256_be() >= range_e.to_u256_be() {
                            return;
                        }
                        let pk = *guard;
                        let span = remaining_span(&range_e, &pk).unwrap_or(u64::MAX);
                        let iterations = span.min(MAX_JOB_SIZE).max(1);
                        let next = pk.add_stride(&stride_k, iterations);
                        if next.to_u256_be() <= pk.to_u256_be() {
                            *guard = range_e;
                        } else {
                            *guard = next;
                        }
                        (pk, iterations)
                    };

                    if let Err(error) = run_job(context, &gpoints, &stride_k, &pk, iterations) {
                        tracing::error!(%error, "fallo aritmético en el motor de barrido");
                        return;
                    }

                    context.print_status(false);
                }
            });
        }
    });

    context.print_status(true);
}
