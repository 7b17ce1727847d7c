// [apps/cli/src/hex_codec.rs]
/*!
 * =================================================================
 * APARATO: HEX CODEC SOBERANO (SHELL)
 * RESPONSABILIDAD: PARSEO TOLERANTE DE ESCALARES Y RANGOS HEXADECIMALES
 *
 * Replica el contrato de `fe_from_hex` de la fuente: lee el texto de
 * derecha a izquierda, ignora cualquier carácter que no sea un dígito
 * hexadecimal, y construye un entero de 256 bits alineado a la derecha
 * (los dígitos menos significativos son los últimos caracteres válidos
 * de la cadena). Una cadena vacía de dígitos válidos es un error.
 * =================================================================
 */

use crate::errors::CliError;
use prospector_core_math::prelude::Scalar;

/// Convierte una cadena hexadecimal de longitud variable en un buffer
/// Big-Endian de 32 bytes, alineado a la derecha, ignorando caracteres
/// no hexadecimales (incluyendo un prefijo `0x` opcional).
pub fn parse_u256_hex(text: &str) -> Result<[u8; 32], CliError> {
    let mut nibbles: Vec<u8> = Vec::with_capacity(64);
    for character in text.chars().rev() {
        if let Some(value) = character.to_digit(16) {
            nibbles.push(value as u8);
        }
    }

    if nibbles.is_empty() {
        return Err(CliError::InvalidRange(format!("'{text}' contiene cero dígitos hexadecimales")));
    }
    if nibbles.len() > 64 {
        return Err(CliError::InvalidRange(format!("'{text}' excede 256 bits (64 dígitos hex)")));
    }

    let mut bytes = [0u8; 32];
    for (index, nibble) in nibbles.into_iter().enumerate() {
        let byte_index = 31 - index / 2;
        if index % 2 == 0 {
            bytes[byte_index] = nibble;
        } else {
            bytes[byte_index] |= nibble << 4;
        }
    }
    Ok(bytes)
}

/// Parsea una línea de entrada de `mul` (modo no crudo) como un escalar
/// módulo `n`, tolerando la misma sintaxis laxa que `parse_u256_hex`.
pub fn parse_scalar_hex(line: &str) -> Result<Scalar, CliError> {
    let bytes = parse_u256_hex(line)?;
    Scalar::from_u256_be(bytes).map_err(|error| CliError::EmptyScalarLine.tap_source(error))
}

impl CliError {
    /// Adjunta el texto de un `MathError` subyacente al mensaje de línea vacía,
    /// usado cuando un escalar hexadecimal colapsa a cero tras la reducción.
    fn tap_source(self, source: prospector_core_math::prelude::MathError) -> Self {
        tracing::debug!(%source, "scalar hexadecimal inválido tras reducción modular");
        self
    }
}
