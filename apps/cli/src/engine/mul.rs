// [apps/cli/src/engine/mul.rs]
/*!
 * =================================================================
 * APARATO: SCALAR LIST ENGINE (SHELL)
 * RESPONSABILIDAD: MULTIPLICACIÓN POR LOTES DE ESCALARES LEÍDOS DE STDIN
 *
 * Puerto de `cmd_mul_worker`/`cmd_mul` de la fuente: un único hilo
 * productor agrupa hasta `GROUP` líneas de la entrada en un lote y lo
 * empuja a una cola acotada; los hilos de trabajo retiran lotes, derivan
 * un escalar por línea (hexadecimal, o SHA-256 de texto crudo bajo
 * `-raw`), multiplican cada uno por el generador, y reducen el lote
 * completo a afín con una sola inversión amortizada antes de auditar
 * contra el filtro.
 *
 * # Mapeo SHA-256 → escalar (modo `-raw`)
 * La fuente reinterpreta las cinco... en realidad ocho palabras de 32
 * bits del digest SHA-256 (big-endian) como un entero de 256 bits
 * big-endian directo: exactamente el contrato de `Scalar::from_u256_be`
 * sobre los 32 bytes crudos del digest, sin ninguna permutación adicional.
 * =================================================================
 */

use std::io::BufRead;
use std::sync::Arc;
use std::thread;

use prospector_core_math::prelude::{JacobianPoint, Scalar};
use sha2::{Digest, Sha256};

use crate::context::SearchContext;
use crate::engine::batch_reduce_to_affine;
use crate::hex_codec::parse_u256_hex;
use crate::queue::BoundedQueue;
use crate::range::GROUP_SIZE;

/// Longitud máxima de una línea de entrada antes de truncarla (`MAX_LINE_SIZE` en la fuente).
const MAX_LINE_LENGTH: usize = 128;

fn line_to_scalar(line: &str, raw: bool) -> Option<Scalar> {
    let truncated: String = line.chars().take(MAX_LINE_LENGTH).collect();
    let trimmed = truncated.trim();
    if trimmed.is_empty() {
        return None;
    }

    if raw {
        let digest = Sha256::digest(trimmed.as_bytes());
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Scalar::from_u256_be(bytes).ok()
    } else {
        parse_u256_hex(trimmed).ok().and_then(|bytes| Scalar::from_u256_be(bytes).ok())
    }
}

/// Lee lotes de hasta `GROUP_SIZE` líneas de `reader`, empujándolos a `queue`,
/// y marca la cola agotada al llegar a fin de entrada.
fn produce<R: BufRead>(reader: R, queue: &BoundedQueue<Vec<String>>) {
    let mut batch = Vec::with_capacity(GROUP_SIZE as usize);
    for line in reader.lines() {
        let Ok(line) = line else { break };
        batch.push(line);
        if batch.len() >= GROUP_SIZE as usize {
            queue.put(std::mem::replace(&mut batch, Vec::with_capacity(GROUP_SIZE as usize)));
        }
    }
    if !batch.is_empty() {
        queue.put(batch);
    }
    queue.mark_done();
}

fn consume(context: &SearchContext, queue: &BoundedQueue<Vec<String>>, raw: bool) {
    while let Some(lines) = queue.get() {
        if context.should_stop() {
            break;
        }

        let scalars: Vec<Scalar> = lines.iter().filter_map(|line| line_to_scalar(line, raw)).collect();
        if scalars.is_empty() {
            continue;
        }

        let points: Vec<JacobianPoint> = scalars.iter().map(JacobianPoint::from_private).collect();
        let affine_points = match batch_reduce_to_affine(&points) {
            Ok(points) => points,
            Err(error) => {
                tracing::error!(%error, "fallo al reducir el lote de mul a afín");
                continue;
            }
        };

        for (scalar, affine) in scalars.iter().zip(affine_points.iter()) {
            let x_be = affine.x.internal_words_to_be_bytes();
            let y_be = affine.y.internal_words_to_be_bytes();
            context.check_point(&x_be, &y_be, scalar);
        }

        context.record_checked(scalars.len() as u64);
        context.print_status(false);
    }
}

/// Ejecuta el motor `mul`: un productor lee `reader` y `thread_count`
/// consumidores multiplican y auditan cada lote en paralelo.
pub fn run<R: BufRead + Send + 'static>(context: Arc<SearchContext>, reader: R, raw: bool, thread_count: usize) {
    let queue = Arc::new(BoundedQueue::<Vec<String>>::new(4));

    thread::scope(|scope| {
        let producer_queue = Arc::clone(&queue);
        scope.spawn(move || produce(reader, &producer_queue));

        for _ in 0..thread_count.max(1) {
            let worker_queue = Arc::clone(&queue);
            let worker_context = Arc::clone(&context);
            scope.spawn(move || consume(&worker_context, &worker_queue, raw));
        }
    });

    context.print_status(true);
}
