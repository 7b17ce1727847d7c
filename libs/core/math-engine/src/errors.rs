// [libs/core/math-engine/src/errors.rs]
/*!
 * =================================================================
 * APARATO: MATH ERROR CATALOG (L1-CORE)
 * RESPONSABILIDAD: TIPADO DE FALLOS ARITMÉTICOS Y GEOMÉTRICOS
 *
 * Todas las variantes representan condiciones que el llamador debería
 * poder evitar (entrada fuera de rango, punto al infinito, inversión
 * de cero); se tipan en vez de usar `panic!` para que el Shell pueda
 * convertirlas en un diagnóstico y una salida con código distinto de
 * cero en lugar de abortar el proceso sin contexto.
 * =================================================================
 */

use thiserror::Error;

/// Errores producidos por la capa de aritmética de campo y curva.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MathError {
    /// Un escalar o elemento de campo no pudo construirse con el formato esperado.
    #[error("formato de clave inválido: {0}")]
    InvalidKeyFormat(String),

    /// División (inversión modular) por cero.
    #[error("división por cero en aritmética modular")]
    DivisionByZero,

    /// Una invariante interna del motor geométrico fue violada (punto al infinito
    /// donde no se esperaba, verificación de hash fallida tras un acierto, etc.).
    #[error("invariante geométrica violada: {0}")]
    InvariantViolation(String),

    /// Los buffers de entrada/salida de una operación por lote no coinciden en longitud.
    #[error("longitud de lote inconsistente: esperado {expected}, recibido {actual}")]
    BatchLengthMismatch {
        /// Longitud esperada.
        expected: usize,
        /// Longitud recibida.
        actual: usize,
    },
}
