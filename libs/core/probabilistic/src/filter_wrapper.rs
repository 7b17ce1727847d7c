// [libs/core/probabilistic/src/filter_wrapper.rs]
/*!
 * =================================================================
 * APARATO: PROBABILISTIC FILTER WRAPPER (V43.0 - ZENITH GOLD)
 * CLASIFICACIÓN: CORE INFRASTRUCTURE (ESTRATO L1)
 * RESPONSABILIDAD: FILTRO DE BLOOM DE 20 FUNCIONES HASH PARA HASH160
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ESQUEMA SOBERANO: Las 20 posiciones de bit por inserción se derivan
 *    directamente del propio digest (cinco mezclas de 64 bits rotadas en
 *    cuatro desplazamientos), sin depender de una librería de hashing
 *    genérica de terceros.
 * 2. BINARY PARITY: El formato de persistencia (`ECBF`, versión 1, tamaño,
 *    palabras de 64 bits) se fija en little-endian explícito para que el
 *    artefacto sea portable entre arquitecturas, documentado como la
 *    resolución de la pregunta abierta sobre endianness nativo.
 * =================================================================
 */

use crate::digest::Hash160;
use crate::errors::FilterError;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

/// FourCC `ECBF` que identifica el formato de archivo del filtro de Bloom.
const BLOOM_FILE_MAGIC: u32 = 0x4543_4246;
/// Única versión de formato soportada. Un único byte en el encabezado:
/// `magic:4, version:1, size:u64`.
const BLOOM_FILE_VERSION: u8 = 1;
/// Desplazamientos de rotación usados para derivar las 20 posiciones de bit.
const ROTATION_SHIFTS: [u32; 4] = [24, 28, 36, 40];

/// Filtro de Bloom de 20 funciones hash sobre un `Hash160` de 160 bits.
///
/// El almacenamiento es un arreglo de palabras de 64 bits interpretado como
/// `size * 64` posiciones de bit.
pub struct BloomFilter {
    size_words: u64,
    bits: Vec<u64>,
}

impl BloomFilter {
    /// Construye un filtro vacío con `size_words` palabras de 64 bits
    /// (`size_words * 64` posiciones de bit).
    #[must_use]
    pub fn new(size_words: u64) -> Self {
        let safe_size = size_words.max(1);
        Self { size_words: safe_size, bits: vec![0u64; safe_size as usize] }
    }

    /// Deriva el tamaño en palabras de 64 bits recomendado para `expected_items`
    /// entradas con una tasa de falso positivo objetivo `false_positive_rate`,
    /// usando la fórmula estándar de dimensionamiento de filtros de Bloom con
    /// `k = 20` funciones hash, redondeado hacia arriba a palabras completas.
    ///
    /// `m = -(n * ln(p)) / (ln(2)^2)`
    #[must_use]
    pub fn recommended_size_words(expected_items: u64, false_positive_rate: f64) -> u64 {
        let n = expected_items.max(1) as f64;
        let p = false_positive_rate.clamp(f64::MIN_POSITIVE, 0.999_999);
        let bits_needed = -(n * p.ln()) / (std::f64::consts::LN_2 * std::f64::consts::LN_2);
        let words_needed = (bits_needed / 64.0).ceil().max(1.0);
        words_needed as u64
    }

    /// Cantidad de palabras de 64 bits que respaldan este filtro.
    #[must_use]
    pub fn size_words(&self) -> u64 {
        self.size_words
    }

    /// Las cinco mezclas de 64 bits derivadas del digest, concatenando
    /// pares de las cinco palabras de 32 bits: `a1 = w0‖w1`, `a2 = w2‖w3`,
    /// `a3 = w4‖w0`, `a4 = w1‖w2`, `a5 = w3‖w4`.
    fn mixes(hash: &Hash160) -> [u64; 5] {
        let w = hash.words_be();
        [
            (u64::from(w[0]) << 32) | u64::from(w[1]),
            (u64::from(w[2]) << 32) | u64::from(w[3]),
            (u64::from(w[4]) << 32) | u64::from(w[0]),
            (u64::from(w[1]) << 32) | u64::from(w[2]),
            (u64::from(w[3]) << 32) | u64::from(w[4]),
        ]
    }

    /// Las 20 posiciones de bit globales para `hash`: para cada uno de los
    /// cuatro desplazamientos de rotación, cinco valores `(a_i << S) | (a_{i+1} >> S)`
    /// tomados cíclicamente sobre `a1..a5`.
    fn bit_positions(hash: &Hash160) -> [u64; 20] {
        let a = Self::mixes(hash);
        let mut positions = [0u64; 20];
        let mut cursor = 0;
        for shift in ROTATION_SHIFTS {
            for i in 0..5 {
                let next = (i + 1) % 5;
                positions[cursor] = (a[i] << shift) | (a[next] >> shift);
                cursor += 1;
            }
        }
        positions
    }

    #[inline(always)]
    fn set_bit(&mut self, global_index: u64) {
        let total_bits = self.size_words * 64;
        let position = global_index % total_bits;
        self.bits[(position / 64) as usize] |= 1u64 << (position % 64);
    }

    #[inline(always)]
    fn get_bit(&self, global_index: u64) -> bool {
        let total_bits = self.size_words * 64;
        let position = global_index % total_bits;
        (self.bits[(position / 64) as usize] & (1u64 << (position % 64))) != 0
    }

    /// Inserta un digest en el filtro, fijando las 20 posiciones de bit derivadas.
    pub fn insert(&mut self, hash: &Hash160) {
        for position in Self::bit_positions(hash) {
            self.set_bit(position);
        }
    }

    /// Consulta la presencia de un digest. `true` indica posible presencia
    /// (sujeta a la tasa de falso positivo); `false` indica ausencia certera.
    #[must_use]
    pub fn query(&self, hash: &Hash160) -> bool {
        Self::bit_positions(hash).iter().all(|&position| self.get_bit(position))
    }

    /// Persiste el filtro en disco: magic `ECBF`, versión `1`, `size` en
    /// palabras de 64 bits, seguido de las palabras en little-endian.
    #[instrument(skip(self, path))]
    pub fn save_to_disk<P: AsRef<Path>>(&self, path: P) -> Result<(), FilterError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_u32::<LittleEndian>(BLOOM_FILE_MAGIC)?;
        writer.write_u8(BLOOM_FILE_VERSION)?;
        writer.write_u64::<LittleEndian>(self.size_words)?;
        for word in &self.bits {
            writer.write_u64::<LittleEndian>(*word)?;
        }
        writer.flush()?;
        info!(words = self.size_words, "bloom filter persisted to disk");
        Ok(())
    }

    /// Carga un filtro previamente persistido, validando el magic y la versión.
    #[instrument(skip(path))]
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let magic = reader.read_u32::<LittleEndian>()?;
        if magic != BLOOM_FILE_MAGIC {
            return Err(FilterError::InvalidMagic);
        }
        let version = reader.read_u8()?;
        if version != BLOOM_FILE_VERSION {
            return Err(FilterError::UnsupportedVersion(version));
        }
        let size_words = reader.read_u64::<LittleEndian>()?;

        let mut bits = vec![0u64; size_words as usize];
        for word in &mut bits {
            *word = reader.read_u64::<LittleEndian>()?;
        }

        debug!(words = size_words, "bloom filter hydrated from disk");
        Ok(Self { size_words, bits })
    }

    /// Lee únicamente el encabezado (`size` en palabras) sin materializar el
    /// cuerpo de bits, usado por `blf-gen` para validar una actualización
    /// in-place antes de decidir si reconstruir desde cero.
    pub fn peek_size_words<P: AsRef<Path>>(path: P) -> Result<u64, FilterError> {
        let mut file = File::open(path)?;
        let mut header = [0u8; 13];
        file.read_exact(&mut header)?;
        let magic = u32::from_le_bytes(header[0..4].try_into().unwrap());
        if magic != BLOOM_FILE_MAGIC {
            return Err(FilterError::InvalidMagic);
        }
        let version = header[4];
        if version != BLOOM_FILE_VERSION {
            return Err(FilterError::UnsupportedVersion(version));
        }
        Ok(u64::from_le_bytes(header[5..13].try_into().unwrap()))
    }
}
