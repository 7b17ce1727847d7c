// [libs/core/probabilistic/src/filter.rs]
/*!
 * =================================================================
 * APARATO: UNIFIED MEMBERSHIP FILTER (V43.0 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: UNIÓN ETIQUETADA BLOOM / LISTA ORDENADA
 *
 * El motor de barrido no necesita saber si el censo cargado es un filtro de
 * Bloom probabilístico o una lista ordenada exacta: consulta `membership`
 * y obtiene una respuesta uniforme. Cuando la lista ordenada está presente,
 * su propio Bloom acelerador ya filtra la mayoría de las ausencias antes de
 * la búsqueda binaria, de modo que aquí la composición es una simple "Y"
 * lógica entre el Bloom externo (si se cargó uno junto a la lista) y la
 * lista misma.
 * =================================================================
 */

use crate::digest::Hash160;
use crate::filter_wrapper::BloomFilter;
use crate::hash_list::HashListFilter;

/// Filtro de membresía unificado: o bien un filtro de Bloom puro, o bien una
/// lista ordenada exacta (que ya incorpora su propio Bloom acelerador).
pub enum Filter {
    /// Un filtro de Bloom de 160 bits, sujeto a falsos positivos.
    Bloom(BloomFilter),
    /// Una lista ordenada exacta de `Hash160`.
    HashList(HashListFilter),
}

impl Filter {
    /// Consulta unificada de membresía.
    ///
    /// `membership(h) = bloom.query(h)` cuando el filtro cargado es un Bloom
    /// puro, o `list.contains(h)` (ya acelerado por su Bloom interno) cuando
    /// es una lista ordenada.
    #[must_use]
    pub fn membership(&self, hash: &Hash160) -> bool {
        match self {
            Filter::Bloom(bloom) => bloom.query(hash),
            Filter::HashList(list) => list.contains(hash),
        }
    }
}

impl From<BloomFilter> for Filter {
    fn from(bloom: BloomFilter) -> Self {
        Filter::Bloom(bloom)
    }
}

impl From<HashListFilter> for Filter {
    fn from(list: HashListFilter) -> Self {
        Filter::HashList(list)
    }
}
