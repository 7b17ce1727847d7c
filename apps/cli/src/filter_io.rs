// [apps/cli/src/filter_io.rs]
/*!
 * =================================================================
 * APARATO: FILTER LOADING AND BLOOM FILTER COMMANDS (SHELL)
 * RESPONSABILIDAD: CARGA DE `-f`, Y LOS SUBCOMANDOS `blf-gen`/`blf-check`
 *
 * Espejo de `load_filter`/`blf_gen` de la fuente: la extensión `.blf`
 * selecciona un filtro de Bloom binario; cualquier otra extensión
 * selecciona un censo de texto (un HASH160 hexadecimal por línea),
 * ordenado y acelerado con su propio filtro de Bloom de respaldo.
 * =================================================================
 */

use std::io::{self, BufRead, Write};
use std::path::Path;

use prospector_core_probabilistic::prelude::{BloomFilter, Filter, FilterError, Hash160, HashListFilter};

use crate::cli::{BlfCheckArgs, BlfGenArgs};
use crate::errors::CliError;

/// Carga `-f <archivo>`, despachando por extensión entre filtro de Bloom
/// binario y censo de texto, como `load_filter` en la fuente.
pub fn load_filter(path: &Path) -> Result<Filter, CliError> {
    let is_binary = path.extension().and_then(|ext| ext.to_str()) == Some("blf");

    if is_binary {
        let bloom = BloomFilter::load_from_disk(path)
            .map_err(|error| CliError::InvalidRange(format!("no se pudo cargar el filtro de Bloom: {error}")))?;
        Ok(Filter::Bloom(bloom))
    } else {
        let list = HashListFilter::load_from_text_file(path)
            .map_err(|error| CliError::InvalidRange(format!("no se pudo cargar el censo de texto: {error}")))?;
        Ok(Filter::HashList(list))
    }
}

/// Ejecuta `blf-gen`: lee líneas HASH160 hexadecimales de la entrada
/// estándar y construye (o actualiza in-place, si `-o` ya existe con el
/// mismo tamaño) un filtro de Bloom binario dimensionado para `-n` entradas
/// a la tasa de falso positivo `--fp-rate`.
pub fn run_blf_gen(args: &BlfGenArgs) -> Result<(), CliError> {
    let size_words = BloomFilter::recommended_size_words(args.expected_items, args.false_positive_rate);

    let mut bloom = if args.output.exists() {
        let existing_size = BloomFilter::peek_size_words(&args.output)
            .map_err(|error| CliError::InvalidRange(format!("no se pudo leer el filtro existente: {error}")))?;
        if existing_size != size_words {
            return Err(CliError::InvalidRange(format!(
                "el tamaño del filtro existente ({existing_size} palabras) no coincide con el calculado ({size_words} palabras); borre el archivo o use otro"
            )));
        }
        eprintln!("el archivo {} ya existe; actualizando...", args.output.display());
        BloomFilter::load_from_disk(&args.output)
            .map_err(|error| CliError::InvalidRange(format!("no se pudo cargar el filtro existente: {error}")))?
    } else {
        eprintln!("creando filtro de Bloom nuevo...");
        BloomFilter::new(size_words)
    };

    eprintln!(
        "parámetros del filtro: n = {} | p = 1:{:.0} | m = {} palabras",
        args.expected_items,
        1.0 / args.false_positive_rate,
        size_words
    );

    let stdin = io::stdin();
    let mut count = 0u64;
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let trimmed = line.trim();
        if trimmed.len() != 40 {
            continue;
        }
        let Ok(hash) = Hash160::from_hex(trimmed) else { continue };
        bloom.insert(&hash);
        count += 1;
    }

    bloom
        .save_to_disk(&args.output)
        .map_err(|error| CliError::InvalidRange(format!("no se pudo escribir el filtro de Bloom: {error}")))?;

    eprintln!("filtro de Bloom escrito en {} ({count} hashes procesados)", args.output.display());
    Ok(())
}

/// Ejecuta `blf-check`: consulta membresía de cada HASH160 dado (por
/// argumento, o por línea de la entrada estándar si no se proveen) contra
/// el filtro de Bloom binario indicado por `-f`.
pub fn run_blf_check(args: &BlfCheckArgs) -> Result<(), CliError> {
    let bloom = BloomFilter::load_from_disk(&args.filter)
        .map_err(|error| CliError::InvalidRange(format!("no se pudo cargar el filtro de Bloom: {error}")))?;

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let check_one = |writer: &mut io::StdoutLock, text: &str| -> Result<(), CliError> {
        let hash = Hash160::from_hex(text).map_err(|error: FilterError| {
            CliError::InvalidRange(format!("hash160 inválido '{text}': {error}"))
        })?;
        let present = bloom.query(&hash);
        writeln!(writer, "{text}\t{}", if present { "hit" } else { "miss" })
            .map_err(|error| CliError::InvalidRange(format!("fallo al escribir a stdout: {error}")))
    };

    if args.hashes.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            check_one(&mut writer, trimmed)?;
        }
    } else {
        for hash_text in &args.hashes {
            check_one(&mut writer, hash_text)?;
        }
    }

    Ok(())
}
