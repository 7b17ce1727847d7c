// [apps/cli/src/range.rs]
/*!
 * =================================================================
 * APARATO: RANGE AND DIGEST WINDOW PARSING (SHELL)
 * RESPONSABILIDAD: INTERPRETACIÓN DE `-r <inicio>:<fin>` Y `-d <offs>:<tamaño>`
 *
 * Espejo de `arg_search_range`/`load_offs_size` de la fuente. Los rangos de
 * barrido se tratan como escalares módulo n (no módulo p como en la fuente
 * original): una llave privada de Bitcoin válida siempre es < n, así que
 * anclar el rango ahí evita necesitar una aritmética de 256 bits paralela
 * fuera del módulo n solo para el seguimiento del cursor, y le permite a
 * `JacobianPoint::from_private` consumir el rango sin una ruta de bytes
 * crudos separada.
 * =================================================================
 */

use crate::errors::CliError;
use crate::hex_codec::parse_u256_hex;
use prospector_core_math::prelude::Scalar;

/// Tamaño mínimo de ventana de dígitos (bits), igual a `MIN_SIZE` en la fuente.
pub const MIN_WINDOW_SIZE: u32 = 20;
/// Tamaño máximo de ventana de dígitos (bits), igual a `MAX_SIZE` en la fuente.
pub const MAX_WINDOW_SIZE: u32 = 64;
/// Tamaño de grupo de inversión por lote (`GROUP_INV_SIZE` en la fuente).
pub const GROUP_SIZE: u64 = 1024;
/// Techo de trabajo por unidad de cursor compartido (`MAX_JOB_SIZE` en la fuente).
pub const MAX_JOB_SIZE: u64 = 2 * 1024 * 1024;

/// Cuenta los bits significativos de un escalar (posición del bit más alto + 1).
#[must_use]
pub fn bit_length(scalar: &Scalar) -> u32 {
    for (index, &limb) in scalar.private_scalar_limbs.iter().enumerate().rev() {
        if limb != 0 {
            return (index as u32) * 64 + (64 - limb.leading_zeros());
        }
    }
    0
}

fn scalar_from_hex(text: &str) -> Result<Scalar, CliError> {
    let bytes = parse_u256_hex(text)?;
    Scalar::from_u256_be(bytes).map_err(|error| CliError::InvalidRange(format!("'{text}': {error}")))
}

/// Parsea `-r <inicio>:<fin>`, exigiendo `inicio < fin`.
pub fn parse_hex_range(text: &str) -> Result<(Scalar, Scalar), CliError> {
    let (start_text, end_text) = text
        .split_once(':')
        .ok_or_else(|| CliError::InvalidRange(format!("'{text}' debe tener la forma inicio:fin")))?;

    let start = scalar_from_hex(start_text)?;
    let end = scalar_from_hex(end_text)?;

    if start.to_u256_be() >= end.to_u256_be() {
        return Err(CliError::InvalidRange(format!("el inicio del rango debe ser menor que el fin: '{text}'")));
    }

    Ok((start, end))
}

/// El rango por defecto cuando no se provee `-r`: `[GROUP_SIZE, n)`.
#[must_use]
pub fn default_range() -> (Scalar, Scalar) {
    let mut start_bytes = [0u8; 32];
    start_bytes[24..32].copy_from_slice(&GROUP_SIZE.to_be_bytes());
    let start = Scalar::from_u256_be(start_bytes).expect("GROUP_SIZE es un escalar no nulo válido");

    // n - 1, el escalar válido más alto.
    let end = Scalar::zero().sub_mod_n(&Scalar::from_u256_be({
        let mut one = [0u8; 32];
        one[31] = 1;
        one
    }).unwrap());

    (start, end)
}

/// Calcula `(offset, tamaño)` por defecto a partir de la longitud en bits del
/// rango, replicando la fórmula de `load_offs_size`: ventanas por debajo de
/// 32 bits usan la longitud completa (acotada por abajo a `MIN_WINDOW_SIZE`);
/// de lo contrario se fija una ventana de 32 bits.
#[must_use]
pub fn default_window(range_bit_length: u32) -> (u32, u32) {
    let default_size = if range_bit_length < 32 {
        range_bit_length.max(MIN_WINDOW_SIZE)
    } else {
        32
    };
    (0, default_size)
}

/// El paso de avance del barrido por lotes es `2^ord_offs`: recorrer el
/// rango saltando de a `2^ord_offs` explora un único "dígito" de orden
/// `ord_offs` sobre todas sus combinaciones, dejando el resto de los bits
/// fijos en los de `range_s`. Con `ord_offs = 0` (el valor por defecto de
/// `add`) el paso es `1` y el barrido es estrictamente secuencial.
pub fn stride_from_offset(ord_offs: u32) -> Result<Scalar, CliError> {
    let mut bytes = [0u8; 32];
    if ord_offs < 256 {
        let byte_index = 31 - (ord_offs / 8) as usize;
        bytes[byte_index] = 1u8 << (ord_offs % 8);
    }
    Scalar::from_u256_be(bytes).map_err(|error| CliError::InvalidDigestOffset(format!("offset de paso inválido: {error}")))
}

/// El mayor desplazamiento de ventana válido para un rango de `range_bit_length` bits.
#[must_use]
pub fn max_window_offset(range_bit_length: u32, window_size: u32) -> u32 {
    range_bit_length.max(MIN_WINDOW_SIZE).saturating_sub(window_size).max(1)
}

/// Parsea `-d <offs>:<tamaño>`, acotando `offs <= 255` y `tamaño` al rango
/// `[MIN_WINDOW_SIZE, MAX_WINDOW_SIZE]`.
pub fn parse_digest_window(text: &str) -> Result<(u32, u32), CliError> {
    let (offset_text, size_text) = text
        .split_once(':')
        .ok_or_else(|| CliError::InvalidDigestOffset(format!("'{text}' debe tener la forma offset:tamaño")))?;

    let offset: u32 = offset_text
        .parse()
        .map_err(|_| CliError::InvalidDigestOffset(format!("offset inválido: '{offset_text}'")))?;
    let size: u32 = size_text
        .parse()
        .map_err(|_| CliError::InvalidDigestOffset(format!("tamaño inválido: '{size_text}'")))?;

    if offset > 255 {
        return Err(CliError::InvalidDigestOffset(format!("offset {offset} excede 255")));
    }
    if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&size) {
        return Err(CliError::InvalidDigestOffset(format!(
            "tamaño {size} fuera de [{MIN_WINDOW_SIZE}, {MAX_WINDOW_SIZE}]"
        )));
    }

    Ok((offset, size))
}
