// [libs/core/math-engine/src/generator_table.rs]
/*!
 * =================================================================
 * APARATO: FIXED-BASE GENERATOR TABLE (V171.0 - ZENITH GOLD MASTER)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: MULTIPLICACIÓN DE BASE FIJA k*G POR VENTANAS DE 14 BITS
 *
 * # Mathematical Proof (Windowed fixed-base multiplication)
 * El escalar k de 256 bits se parte en d = ceil(256/w) dígitos en base
 * 2^w (w = WINDOW_BITS = 14, d = ROWS = 19). La fila i contiene, en
 * coordenadas afines, los 2^w - 1 múltiplos {1, 2, ..., 2^w-1} de la
 * base de esa fila, donde la base de la fila 0 es G y la base de la
 * fila i es 2^(w*i) * G. Para evaluar k*G se suma, para cada dígito no
 * nulo d_i, la entrada (d_i - 1) de la fila i.
 *
 * La tabla se construye una sola vez por proceso mediante duplicación
 * sucesiva y adición repetida (sin multiplicación escalar genérica),
 * y se reduce a afín en un único lote al final, amortizando la
 * inversión modular sobre las ~300k entradas.
 * =================================================================
 */

use crate::field::FieldElement;
use crate::point::JacobianPoint;
use once_cell::sync::Lazy;

/// Ancho de ventana en bits. 2^14 - 1 = 16383 entradas por fila.
pub const WINDOW_BITS: u32 = 14;

/// Número de filas: ceil(256 / WINDOW_BITS).
pub const ROWS: usize = (256 + WINDOW_BITS as usize - 1) / WINDOW_BITS as usize;

/// Entradas por fila: 2^WINDOW_BITS - 1 (el dígito cero no se almacena).
pub const ROW_SIZE: usize = (1usize << WINDOW_BITS) - 1;

/// Punto afín inmutable almacenado en la tabla (Z = 1 implícito).
#[derive(Debug, Clone, Copy)]
pub struct StaticAffinePoint {
    /// Coordenada X afín (limbs little-endian).
    pub x_limbs: [u64; 4],
    /// Coordenada Y afín (limbs little-endian).
    pub y_limbs: [u64; 4],
}

/// Coordenadas canónicas del generador G de secp256k1 (limbs little-endian).
const GENERATOR_X: [u64; 4] = [0x59F2815B16F81798, 0x029BFCDB2DCE28D9, 0x55A06295CE870B07, 0x79BE667EF9DCBBAC];
const GENERATOR_Y: [u64; 4] = [0x9C47D08FFB10D4B8, 0xFD17B448A6855419, 0x5DA4FBFC0E1108A8, 0x483ADA7726A3C465];

/// Tabla de ventana fija completa: `ROWS` filas de `ROW_SIZE` puntos afines cada una.
pub struct GeneratorTable {
    rows: Vec<Vec<StaticAffinePoint>>,
}

impl GeneratorTable {
    /// Construye la tabla completa partiendo del generador estándar secp256k1.
    #[must_use]
    pub fn build_default() -> Self {
        Self::build(JacobianPoint::from_affine(GENERATOR_X, GENERATOR_Y))
    }

    /// Construye la tabla de ventana fija a partir de un punto base arbitrario.
    ///
    /// Usado por el diagnóstico `bench-gtable` para medir el coste de
    /// construcción sin tocar la tabla de proceso por defecto.
    #[must_use]
    pub fn build(base_point: JacobianPoint) -> Self {
        let mut jacobian_rows: Vec<Vec<JacobianPoint>> = Vec::with_capacity(ROWS);
        let mut row_base = base_point;

        for _ in 0..ROWS {
            let mut row_entries = Vec::with_capacity(ROW_SIZE);
            let mut running_point = row_base;
            row_entries.push(running_point);
            for _ in 1..ROW_SIZE {
                running_point = running_point.add_deterministic(&row_base);
                row_entries.push(running_point);
            }
            // La siguiente base es 2^w * row_base = (2^w - 1)*row_base + row_base.
            row_base = running_point.add_deterministic(&row_base);
            jacobian_rows.push(row_entries);
        }

        Self {
            rows: Self::batch_reduce_to_affine(jacobian_rows),
        }
    }

    /// Reduce todos los puntos Jacobianos de la tabla a afín en un único lote,
    /// amortizando la inversión modular de las coordenadas Z sobre todas las entradas.
    fn batch_reduce_to_affine(jacobian_rows: Vec<Vec<JacobianPoint>>) -> Vec<Vec<StaticAffinePoint>> {
        let total_points: usize = jacobian_rows.iter().map(Vec::len).sum();
        let z_coordinates: Vec<FieldElement> = jacobian_rows
            .iter()
            .flat_map(|row| row.iter().map(|point| point.z))
            .collect();

        let mut z_inverses = vec![FieldElement::from_u64(0); total_points];
        let mut scratch = vec![FieldElement::from_u64(0); total_points];
        FieldElement::batch_invert_into(&z_coordinates, &mut z_inverses, &mut scratch)
            .expect("la tabla de generador nunca contiene un punto en el infinito");

        let mut cursor = 0usize;
        jacobian_rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|point| {
                        let z_inverse = z_inverses[cursor];
                        cursor += 1;
                        let z_inverse_sq = z_inverse.square_modular();
                        let z_inverse_cu = z_inverse_sq.multiply_modular(&z_inverse);
                        StaticAffinePoint {
                            x_limbs: point.x.multiply_modular(&z_inverse_sq).internal_words,
                            y_limbs: point.y.multiply_modular(&z_inverse_cu).internal_words,
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Multiplica el generador (o la base con la que se construyó la tabla) por `scalar_limbs`.
    #[must_use]
    pub fn multiply(&self, scalar_limbs: &[u64; 4]) -> JacobianPoint {
        let mut accumulator = JacobianPoint::infinity();

        for (row_index, row) in self.rows.iter().enumerate() {
            let digit = extract_window(scalar_limbs, row_index as u32 * WINDOW_BITS, WINDOW_BITS);
            if digit == 0 {
                continue;
            }
            let entry = &row[(digit - 1) as usize];
            let entry_point = JacobianPoint::from_affine(entry.x_limbs, entry.y_limbs);
            accumulator = if accumulator.is_infinity {
                entry_point
            } else {
                accumulator.add_deterministic(&entry_point)
            };
        }

        accumulator
    }
}

/// Extrae un valor de `width` bits comenzando en `bit_offset` (LSB-first) de un
/// entero de 256 bits almacenado como 4 limbs little-endian. Bits más allá del
/// límite de 256 se tratan como cero, necesario para la última fila cuando
/// `ROWS * WINDOW_BITS > 256`.
fn extract_window(limbs: &[u64; 4], bit_offset: u32, width: u32) -> u32 {
    if bit_offset >= 256 {
        return 0;
    }
    let limb_index = (bit_offset / 64) as usize;
    let bit_in_limb = bit_offset % 64;

    let mut value: u64 = limbs[limb_index] >> bit_in_limb;
    let bits_obtained = 64 - bit_in_limb;
    if bits_obtained < width {
        let next_index = limb_index + 1;
        if next_index < 4 {
            value |= limbs[next_index] << bits_obtained;
        }
    }
    (value & ((1u64 << width) - 1)) as u32
}

/// Tabla de ventana fija del generador estándar secp256k1, construida una sola vez.
pub static GENERATOR_TABLE: Lazy<GeneratorTable> = Lazy::new(GeneratorTable::build_default);
