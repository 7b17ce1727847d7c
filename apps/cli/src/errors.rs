// [apps/cli/src/errors.rs]
/*!
 * =================================================================
 * APARATO: CLI ERROR CATALOG (SHELL)
 * RESPONSABILIDAD: TIPADO DE FALLOS DE ENTRADA Y CONFIGURACIÓN
 *
 * Cubre los fallos de entrada de usuario y de E/S de `main`. Las
 * violaciones de invariantes aritméticas o geométricas viven en
 * `MathError` y se tratan como fatales en el punto de llamada, no
 * aquí; este catálogo es exclusivamente para lo que el usuario puede
 * corregir reintentando el comando con otros argumentos.
 * =================================================================
 */

use thiserror::Error;

/// Errores de configuración y entrada del shell de línea de comandos.
#[derive(Debug, Error)]
pub enum CliError {
    /// El rango `-r a:b` es inválido (formato, `a >= b`, o fuera de `[1, p)`).
    #[error("rango de búsqueda inválido: {0}")]
    InvalidRange(String),

    /// El desplazamiento/tamaño `-d offs:size` es inválido.
    #[error("offset/tamaño de dígito inválido: {0}")]
    InvalidDigestOffset(String),

    /// Falta el archivo de filtro (`-f`) requerido por el modo.
    #[error("falta el archivo de filtro (-f <archivo>)")]
    MissingFilter,

    /// Se pidió modo silencioso (`-q`) sin archivo de salida (`-o`).
    #[error("modo silencioso (-q) requiere un archivo de salida (-o)")]
    QuietWithoutOutput,

    /// Una línea de entrada de `mul` quedó vacía tras recortar espacios.
    #[error("línea de escalar vacía en la entrada de mul")]
    EmptyScalarLine,
}
