// [libs/core/probabilistic/src/digest.rs]
/*!
 * =================================================================
 * APARATO: HASH160 DIGEST TYPE (V43.0 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: REPRESENTACIÓN CANÓNICA DE UN HASH160 BITCOIN
 *
 * `Hash160` envuelve los 20 bytes crudos de RIPEMD160(SHA256(...)) y expone
 * la descomposición en cinco palabras de 32 bits big-endian que tanto el
 * esquema de 20 hashes del filtro de Bloom como el ordenamiento de la lista
 * lexicográfica requieren.
 * =================================================================
 */

use crate::errors::FilterError;

/// Un Hash160 de 20 bytes (RIPEMD160(SHA256(payload))).
///
/// El orden derivado (`PartialOrd`/`Ord`) es la comparación lexicográfica
/// byte a byte, que coincide con el orden de las cinco palabras de 32 bits
/// en big-endian: es la clave de ordenamiento de la lista de hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash160(pub [u8; 20]);

impl Hash160 {
    /// Construye un digest a partir de 20 bytes crudos.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Decodifica un digest desde 40 caracteres hexadecimales.
    pub fn from_hex(text: &str) -> Result<Self, FilterError> {
        let decoded = hex::decode(text.trim()).map_err(|_| FilterError::InvalidHexDigest(text.to_string()))?;
        let fixed: [u8; 20] = decoded
            .try_into()
            .map_err(|_| FilterError::InvalidHexDigest(text.to_string()))?;
        Ok(Self(fixed))
    }

    /// Codifica el digest como 40 caracteres hexadecimales en minúsculas.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Descompone el digest en cinco palabras de 32 bits big-endian
    /// (`w0` es la más significativa), tal como exige el esquema de hash
    /// del filtro de Bloom.
    #[must_use]
    pub fn words_be(&self) -> [u32; 5] {
        let mut words = [0u32; 5];
        for (index, chunk) in self.0.chunks_exact(4).enumerate() {
            words[index] = u32::from_be_bytes(chunk.try_into().unwrap());
        }
        words
    }

    /// Acceso de sólo lectura a los 20 bytes crudos.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}
