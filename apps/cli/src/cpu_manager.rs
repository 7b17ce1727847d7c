// [apps/cli/src/cpu_manager.rs]
/*!
 * =================================================================
 * APARATO: THREAD COUNT RESOLUTION (SHELL)
 * RESPONSABILIDAD: DIMENSIONAMIENTO DE LA CUADRILLA DE HILOS
 *
 * Espejo directo de la línea de `init()` en la fuente:
 * `threads_count = MIN(MAX(args_int(args, "-t", cpus), 1), 128)`. Sin
 * `-t`, se usa la cuenta de CPUs lógicas; con `-t`, el valor pedido se
 * acota a `[1, 128]` sin importar cuán extravagante sea el argumento.
 * =================================================================
 */

/// Techo absoluto de hilos de trabajo, igual al de la fuente.
const MAX_THREADS: usize = 128;

/// Resuelve la cantidad de hilos de trabajo a partir de `-t`, acotada a
/// `[1, MAX_THREADS]`. Sin valor explícito, usa `num_cpus::get()`.
#[must_use]
pub fn resolve_thread_count(requested: Option<usize>) -> usize {
    let candidate = requested.unwrap_or_else(num_cpus::get);
    candidate.clamp(1, MAX_THREADS)
}
