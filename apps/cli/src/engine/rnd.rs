// [apps/cli/src/engine/rnd.rs]
/*!
 * =================================================================
 * APARATO: RANDOM SUB-RANGE ENGINE (SHELL)
 * RESPONSABILIDAD: BARRIDO SUCESIVO DE SUB-RANGOS ALEATORIOS (`rnd`)
 *
 * Puerto de `gen_random_range`/`cmd_rnd` de la fuente. La tabla
 * `gpoints` se construye una única vez por invocación (el paso
 * `stride_k` no cambia entre iteraciones), y luego cada vuelta del
 * bucle muestrea uniformemente un punto dentro de `[range_s, range_e)`,
 * talla una ventana de `ord_size` bits en el desplazamiento `ord_offs`
 * (el piso de la ventana limpia esos bits, el techo los fija todos a
 * uno), y despacha ese sub-rango a `sweep::run_over_table` antes de
 * repetir con una nueva muestra.
 * =================================================================
 */

use std::sync::Arc;

use prospector_core_math::prelude::{add_u256_be, compare_u256_be, subtract_u256_be, Scalar};
use rand::{RngCore, SeedableRng};
use rand::rngs::StdRng;

use crate::context::SearchContext;
use crate::engine::sweep;
use crate::errors::CliError;
use crate::range::bit_length;

fn clear_bit_be(bytes: &mut [u8; 32], bit: u32) {
    let byte_index = 31 - (bit / 8) as usize;
    bytes[byte_index] &= !(1u8 << (bit % 8));
}

fn set_bit_be(bytes: &mut [u8; 32], bit: u32) {
    let byte_index = 31 - (bit / 8) as usize;
    bytes[byte_index] |= 1u8 << (bit % 8);
}

/// Fuente de aleatoriedad de `rnd`: o bien el generador del sistema operativo,
/// o un PRNG determinista sembrado con `-seed`, según pida el operador.
pub enum RandomSource {
    /// `/dev/urandom`-respaldado, vía `rand::rngs::ThreadRng`.
    OsEntropy,
    /// `StdRng` sembrado de forma reproducible.
    Seeded(StdRng),
}

impl RandomSource {
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(value) => RandomSource::Seeded(StdRng::seed_from_u64(value)),
            None => RandomSource::OsEntropy,
        }
    }

    fn fill(&mut self, buffer: &mut [u8; 32]) {
        match self {
            RandomSource::OsEntropy => rand::thread_rng().fill_bytes(buffer),
            RandomSource::Seeded(rng) => rng.fill_bytes(buffer),
        }
    }
}

/// Muestrea uniformemente un escalar en `[range_s, range_e]` por rechazo:
/// genera un ancho aleatorio no mayor que `range_e - range_s` y lo suma a
/// `range_s`, redescartando muestras que excedan el ancho del rango.
fn sample_uniform_in_range(source: &mut RandomSource, range_s: &Scalar, range_e: &Scalar) -> Result<Scalar, CliError> {
    let start_bytes = range_s.to_u256_be();
    let end_bytes = range_e.to_u256_be();
    let width_bytes = subtract_u256_be(&end_bytes, &start_bytes)
        .map_err(|error| CliError::InvalidRange(format!("rango padre inválido: {error}")))?;

    let width_scalar = Scalar::from_u256_be(width_bytes).unwrap_or_else(|_| Scalar::zero());
    let width_bits = bit_length(&width_scalar).max(1);
    let mask_bytes = (width_bits as usize).div_ceil(8);

    loop {
        let mut candidate = [0u8; 32];
        source.fill(&mut candidate);
        for byte in candidate.iter_mut().take(32 - mask_bytes) {
            *byte = 0;
        }
        let leading_bits = (mask_bytes * 8) as u32 - width_bits;
        if leading_bits > 0 {
            let top_index = 32 - mask_bytes;
            candidate[top_index] &= 0xFFu8 >> leading_bits;
        }

        if compare_u256_be(&candidate, &width_bytes) != std::cmp::Ordering::Greater {
            let sampled_bytes = add_u256_be(&start_bytes, &candidate)
                .map_err(|error| CliError::InvalidRange(format!("desbordamiento al muestrear rango: {error}")))?;
            if let Ok(sampled) = Scalar::from_u256_be(sampled_bytes) {
                return Ok(sampled);
            }
        }
    }
}

/// Talla una ventana `[ord_offs, ord_offs + ord_size)` alrededor de `anchor`,
/// devolviendo `(range_s, range_e)` con esos bits limpios/fijados respectivamente.
/// Reintenta con un nuevo ancla si el resultado colapsa a cero o se invierte.
fn carve_window(
    source: &mut RandomSource,
    parent_s: &Scalar,
    parent_e: &Scalar,
    ord_offs: u32,
    ord_size: u32,
) -> Result<(Scalar, Scalar), CliError> {
    loop {
        let anchor = sample_uniform_in_range(source, parent_s, parent_e)?;
        let anchor_bytes = anchor.to_u256_be();

        let mut start_bytes = anchor_bytes;
        let mut end_bytes = anchor_bytes;
        for bit in ord_offs..(ord_offs + ord_size) {
            clear_bit_be(&mut start_bytes, bit);
            set_bit_be(&mut end_bytes, bit);
        }

        let (Ok(range_s), Ok(range_e)) = (Scalar::from_u256_be(start_bytes), Scalar::from_u256_be(end_bytes)) else {
            continue;
        };

        if range_s.to_u256_be() < range_e.to_u256_be() {
            return Ok((range_s, range_e));
        }
    }
}

/// Imprime la ventana tallada en el formato `inicio..fin`, resaltando (en
/// amarillo ANSI) los dígitos hexadecimales tocados por `[ord_offs,
/// ord_offs + ord_size)`. Puramente informativo, espejo de `print_range_mask`.
fn print_range_mask(range_s: &Scalar, range_e: &Scalar, ord_offs: u32, ord_size: u32) {
    let highlighted_nibbles_low = ord_offs / 4;
    let highlighted_nibbles_high = (ord_offs + ord_size).div_ceil(4);

    for (label, bound) in [("desde", range_s), ("hasta", range_e)] {
        let hex = hex::encode(bound.to_u256_be());
        let mut rendered = String::with_capacity(hex.len() + 16);
        for (index, ch) in hex.chars().enumerate() {
            let distance_from_end = (hex.len() as u32) - (index as u32);
            if distance_from_end > highlighted_nibbles_low && distance_from_end <= highlighted_nibbles_high {
                rendered.push_str("\x1b[33m");
                rendered.push(ch);
                rendered.push_str("\x1b[0m");
            } else {
                rendered.push(ch);
            }
        }
        eprintln!("  {label}: {rendered}");
    }
}

/// Ejecuta el motor `rnd`: construye la tabla `gpoints` una sola vez y
/// luego, hasta recibir la señal de parada, muestrea un sub-rango nuevo en
/// cada vuelta y lo barre por completo antes de muestrear el siguiente.
pub fn run(
    context: Arc<SearchContext>,
    parent_s: Scalar,
    parent_e: Scalar,
    stride_k: Scalar,
    ord_offs: u32,
    ord_size: u32,
    thread_count: usize,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let gpoints = sweep::build_gpoints_table(&stride_k)
        .map_err(|error| CliError::InvalidRange(format!("fallo al precomputar la tabla de barrido: {error}")))?;
    let mut source = RandomSource::from_seed(seed);

    while !context.should_stop() {
        let (range_s, range_e) = carve_window(&mut source, &parent_s, &parent_e, ord_offs, ord_size)?;
        print_range_mask(&range_s, &range_e, ord_offs, ord_size);

        let before = context.snapshot();
        sweep::run_over_table(&context, &gpoints, range_s, range_e, stride_k, thread_count);
        let after = context.snapshot();

        eprintln!(
            "  sub-rango agotado: +{} claves examinadas, +{} hallazgos",
            after.0 - before.0,
            after.1 - before.1
        );
    }

    Ok(())
}
