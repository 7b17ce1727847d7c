// [apps/cli/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PROSPECTOR CLI LIBRARY ROOT (SHELL)
 * CLASIFICACIÓN: ESTRATO L1-WORKER
 * RESPONSABILIDAD: EXPOSICIÓN NOMINAL DE LOS MÓDULOS DEL BARRIDO
 * =================================================================
 */

pub mod cli;
pub mod context;
pub mod cpu_manager;
pub mod diagnostics;
pub mod endomorphism;
pub mod engine;
pub mod errors;
pub mod filter_io;
pub mod hex_codec;
pub mod queue;
pub mod range;

/// Colección soberana de tipos necesaria para la ignición de la Shell.
pub mod prelude {
    pub use crate::cli::{Cli, Mode};
    pub use crate::context::SearchContext;
    pub use crate::errors::CliError;
}
