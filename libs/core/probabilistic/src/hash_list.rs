// [libs/core/probabilistic/src/hash_list.rs]
/*!
 * =================================================================
 * APARATO: SORTED HASH LIST FILTER (V43.0 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: MEMBRESÍA EXACTA SOBRE UN CENSO ORDENADO DE HASH160
 *
 * Alternativa exacta (sin falsos positivos) al filtro de Bloom: un arreglo
 * ordenado y deduplicado de `Hash160`, consultado por búsqueda binaria. Al
 * cargarse construye un filtro de Bloom auxiliar de `2 * count` palabras
 * para rechazar la mayoría de las consultas negativas antes de tocar el
 * arreglo, igual que describe la carga diferida del censo en el origen.
 * =================================================================
 */

use crate::digest::Hash160;
use crate::errors::FilterError;
use crate::filter_wrapper::BloomFilter;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, instrument};

/// Lista ordenada y deduplicada de `Hash160`, acelerada por un Bloom auxiliar.
pub struct HashListFilter {
    sorted_entries: Vec<Hash160>,
    accelerator: BloomFilter,
}

impl HashListFilter {
    /// Construye la lista a partir de un conjunto de digests en cualquier
    /// orden, ordenando y eliminando duplicados, y derivando el Bloom
    /// acelerador con `2 * count` palabras de 64 bits.
    #[must_use]
    pub fn from_entries(mut entries: Vec<Hash160>) -> Self {
        entries.sort_unstable();
        entries.dedup();

        let accelerator_words = (entries.len().max(1) as u64) * 2;
        let mut accelerator = BloomFilter::new(accelerator_words);
        for entry in &entries {
            accelerator.insert(entry);
        }

        Self { sorted_entries: entries, accelerator }
    }

    /// Carga la lista desde un archivo de texto con un digest hexadecimal de
    /// 40 caracteres por línea, ignorando líneas vacías.
    #[instrument(skip(path))]
    pub fn load_from_text_file<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            entries.push(Hash160::from_hex(trimmed)?);
        }
        info!(count = entries.len(), "hash list loaded from text census");
        Ok(Self::from_entries(entries))
    }

    /// Consulta exacta por búsqueda binaria, precedida por el filtro de Bloom
    /// auxiliar para rechazar la mayoría de las ausencias en tiempo constante.
    #[must_use]
    pub fn contains(&self, hash: &Hash160) -> bool {
        if !self.accelerator.query(hash) {
            return false;
        }
        self.sorted_entries.binary_search(hash).is_ok()
    }

    /// Cantidad de entradas únicas indexadas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted_entries.len()
    }

    /// `true` si la lista no contiene entradas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted_entries.is_empty()
    }
}
