// [libs/core/probabilistic/src/lib.rs]

#![deny(missing_docs)]

//! # APARATO: PROBABILISTIC STRATUM ROOT (V43.0 - ZENITH GOLD)
//! CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
//! RESPONSABILIDAD: ORQUESTACIÓN Y EXPOSICIÓN DEL MOTOR DE MEMBRESÍA
//!
//! ## Visión Holística 2026
//! Actúa como la autoridad suprema de la matriz de búsqueda. Expone un
//! filtro de Bloom de 20 funciones hash derivadas del propio `Hash160`
//! (sin librería de hashing de terceros), una lista ordenada exacta como
//! alternativa sin falsos positivos, y la unión etiquetada `Filter` que el
//! motor de barrido consulta sin distinguir cuál de las dos respalda el
//! censo cargado.
//!
//! ## Características de Élite
//! 1. **Esquema Soberano:** Las 20 posiciones de bit del Bloom se derivan
//!    matemáticamente del digest, documentado en `filter_wrapper`.
//! 2. **Persistencia Portable:** Formato binario `ECBF` en little-endian
//!    explícito, independiente de la arquitectura anfitriona.
//! 3. **Membresía Unificada:** `Filter::membership` es el único punto de
//!    consulta que el motor L2 necesita conocer.

/// Definiciones de errores semánticos para el triaje programático de fallos.
pub mod errors;

/// Tipo `Hash160` y su descomposición en palabras para el esquema de hash.
pub mod digest;

/// Filtro de Bloom de 20 funciones hash sobre `Hash160`.
pub mod filter_wrapper;

/// Lista ordenada exacta de `Hash160`, acelerada por un Bloom auxiliar.
pub mod hash_list;

/// Unión etiquetada Bloom / lista ordenada con consulta de membresía unificada.
pub mod filter;

pub use crate::digest::Hash160;
pub use crate::errors::FilterError;
pub use crate::filter::Filter;
pub use crate::filter_wrapper::BloomFilter;
pub use crate::hash_list::HashListFilter;

/**
 * PRELUDIO PROBABILÍSTICO
 *
 * Colección de tipos de alta frecuencia para inyección directa en motores.
 */
pub mod prelude {
    pub use crate::digest::Hash160;
    pub use crate::errors::FilterError;
    pub use crate::filter::Filter;
    pub use crate::filter_wrapper::BloomFilter;
    pub use crate::hash_list::HashListFilter;
}
