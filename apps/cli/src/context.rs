// [apps/cli/src/context.rs]
/*!
 * =================================================================
 * APARATO: SEARCH CONTEXT (SHELL)
 * RESPONSABILIDAD: ESTADO COMPARTIDO ENTRE HILOS DE BARRIDO
 *
 * Equivalente a `ctx_t` de la fuente: un único cerrojo protege los
 * contadores de progreso y el sumidero de salida a la vez, de modo que
 * una línea de hallazgo y la línea de estado periódica nunca se
 * entrelazan en stdout/stderr. Las decisiones de qué codificaciones de
 * dirección auditar (comprimida, sin comprimir, o ambas) y si expandir
 * cada candidato con sus cinco compañeros del endomorfismo GLV viven
 * aquí, no en el bucle de barrido, para que `add`, `mul` y `rnd`
 * compartan exactamente la misma lógica de verificación.
 * =================================================================
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use prospector_core_math::prelude::{addr33, addr65, Scalar};
use prospector_core_probabilistic::prelude::{Filter, Hash160};

use crate::endomorphism;
use crate::errors::CliError;

struct ReportState {
    checked: u64,
    found: u64,
    output: Option<BufWriter<File>>,
}

/// Estado compartido del proceso de barrido: filtro de membresía, qué
/// codificaciones auditar, contadores protegidos por cerrojo y la señal de
/// parada que `main` conecta al manejador de Ctrl-C.
pub struct SearchContext {
    filter: Filter,
    check_compressed: bool,
    check_uncompressed: bool,
    endo: bool,
    quiet: bool,
    state: Mutex<ReportState>,
    start_time: Instant,
    /// Bandera de parada cooperativa; los hilos de trabajo la consultan en
    /// los límites de cada lote, nunca dentro del bucle aritmético interno.
    pub stop_requested: AtomicBool,
}

impl SearchContext {
    /// Construye el contexto compartido. Rechaza `-q` sin `-o`, replicando
    /// la validación de `init()` en la fuente.
    pub fn new(
        filter: Filter,
        check_compressed: bool,
        check_uncompressed: bool,
        endo: bool,
        quiet: bool,
        output_path: Option<&Path>,
    ) -> Result<Self, CliError> {
        if quiet && output_path.is_none() {
            return Err(CliError::QuietWithoutOutput);
        }

        let output = match output_path {
            Some(path) => {
                let file = File::create(path).map_err(|error| {
                    CliError::InvalidRange(format!("no se pudo crear el archivo de salida: {error}"))
                })?;
                Some(BufWriter::new(file))
            }
            None => None,
        };

        Ok(Self {
            filter,
            check_compressed,
            check_uncompressed,
            endo,
            quiet,
            state: Mutex::new(ReportState { checked: 0, found: 0, output }),
            start_time: Instant::now(),
            stop_requested: AtomicBool::new(false),
        })
    }

    /// `true` si el motor debe expandir cada candidato con sus compañeros GLV.
    #[must_use]
    pub fn endomorphism_enabled(&self) -> bool {
        self.endo
    }

    /// `true` si el hilo que llama debe abandonar el trabajo en curso.
    #[must_use]
    pub fn should_stop(&self) -> bool {
        self.stop_requested.load(Ordering::Relaxed)
    }

    /// Audita un único punto afín candidato contra el filtro, bajo las
    /// codificaciones habilitadas, y si `endo` está activo repite la
    /// auditoría sobre sus cinco compañeros GLV con el escalar recuperado.
    ///
    /// Retorna `true` si alguna variante coincidió con el filtro.
    pub fn check_point(&self, x_be: &[u8; 32], y_be: &[u8; 32], scalar: &Scalar) -> bool {
        let mut matched = self.check_single(x_be, y_be, scalar);

        if self.endo {
            for companion in endomorphism::expand(x_be, y_be) {
                let companion_scalar = (companion.recover_scalar)(scalar);
                if self.check_single(&companion.x_be, &companion.y_be, &companion_scalar) {
                    matched = true;
                }
            }
        }

        matched
    }

    fn check_single(&self, x_be: &[u8; 32], y_be: &[u8; 32], scalar: &Scalar) -> bool {
        let mut matched = false;

        if self.check_compressed {
            let hash = Hash160::from_bytes(addr33(x_be, y_be));
            if self.filter.membership(&hash) {
                self.write_found("addr33", &hash, scalar);
                matched = true;
            }
        }

        if self.check_uncompressed {
            let hash = Hash160::from_bytes(addr65(x_be, y_be));
            if self.filter.membership(&hash) {
                self.write_found("addr65", &hash, scalar);
                matched = true;
            }
        }

        matched
    }

    fn write_found(&self, label: &str, hash: &Hash160, scalar: &Scalar) {
        let limbs = scalar.private_scalar_limbs;
        let key_hex = format!("{:016x}{:016x}{:016x}{:016x}", limbs[3], limbs[2], limbs[1], limbs[0]);

        let mut state = self.state.lock().expect("el cerrojo de reporte está envenenado");
        state.found += 1;

        eprint!("\x1b[2K\r");
        println!("{label}: {} <- {key_hex}", hash.to_hex());
        let _ = std::io::stdout().flush();

        if let Some(writer) = state.output.as_mut() {
            let _ = writeln!(writer, "{label}\t{}\t{key_hex}", hash.to_hex());
            let _ = writer.flush();
        }

        tracing::info!(label, hash = %hash.to_hex(), "coincidencia encontrada contra el filtro de membresía");
    }

    /// Acumula `delta` claves examinadas en el contador global.
    pub fn record_checked(&self, delta: u64) {
        let mut state = self.state.lock().expect("el cerrojo de reporte está envenenado");
        state.checked += delta;
    }

    /// Instantánea de `(claves_examinadas, hallazgos)` bajo el cerrojo.
    #[must_use]
    pub fn snapshot(&self) -> (u64, u64) {
        let state = self.state.lock().expect("el cerrojo de reporte está envenenado");
        (state.checked, state.found)
    }

    /// Imprime la línea de estado periódica a stderr, sin efecto si `-q`.
    pub fn print_status(&self, final_line: bool) {
        if self.quiet {
            return;
        }

        let (checked, found) = self.snapshot();
        let elapsed = self.start_time.elapsed().as_secs_f64().max(1e-9);
        let rate_mhz = (checked as f64) / elapsed / 1_000_000.0;
        let terminator = if final_line { '\n' } else { '\r' };

        eprint!(
            "\x1b[2K\r[{elapsed:>9.2}s] {checked:>12} claves · {found:>6} hallazgos · {rate_mhz:>8.4} Mclaves/s{terminator}"
        );
        let _ = std::io::stderr().flush();
    }
}
