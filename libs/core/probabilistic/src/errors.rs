// libs/core/probabilistic/src/errors.rs
// =================================================================
// APARATO: PROBABILISTIC ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS EN EL FILTRO DE BLOOM Y LA LISTA ORDENADA
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los errores posibles durante la operación del filtro de membresía.
///
/// Centraliza los fallos que pueden ocurrir al manipular la estructura
/// probabilística o la lista ordenada de respaldo, desde corrupción del
/// artefacto binario hasta fallos de E/S.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Error de Entrada/Salida del sistema operativo.
    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    /// El archivo no comienza con el FourCC `ECBF` (0x45434246).
    #[error("firma de archivo inválida: se esperaba el magic ECBF")]
    InvalidMagic,

    /// La versión de formato leída del archivo no es la soportada (1).
    #[error("versión de filtro no soportada: {0}")]
    UnsupportedVersion(u8),

    /// El tamaño declarado en el encabezado no concuerda con el filtro cargado
    /// para una operación de actualización in-place.
    #[error("tamaño de filtro inconsistente: encabezado declara {declared} palabras, se esperaban {expected}")]
    SizeMismatch { declared: u64, expected: u64 },

    /// Una cadena hexadecimal de entrada no decodifica a exactamente 20 bytes.
    #[error("hash160 hexadecimal inválido: {0}")]
    InvalidHexDigest(String),

    /// Se intentó consultar o persistir un filtro antes de su inicialización.
    #[error("el filtro no ha sido inicializado")]
    NotInitialized,
}
