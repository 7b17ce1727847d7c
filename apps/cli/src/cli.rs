// [apps/cli/src/cli.rs]
/*!
 * =================================================================
 * APARATO: COMMAND LINE SURFACE (SHELL)
 * RESPONSABILIDAD: DEFINICIÓN DECLARATIVA DE SUBCOMANDOS Y BANDERAS
 *
 * Traduce el árbol de `usage()`/`init()` de la fuente a un árbol de
 * subcomandos `clap`. Cada subcomando conserva las banderas cortas
 * originales (`-f`, `-o`, `-t`, `-a`, `-r`, `-d`, `-q`) junto con sus
 * formas largas, ya que un operador familiarizado con la herramienta
 * original debe poder invocar este binario sin releer la ayuda.
 * =================================================================
 */

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::errors::CliError;

/// Barrido de llaves privadas secp256k1 contra un filtro de membresía Bitcoin.
#[derive(Parser)]
#[command(name = "prospector", version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}

/// Modo de operación seleccionado en la línea de comandos.
#[derive(Subcommand)]
pub enum Mode {
    /// Barre un rango contiguo de llaves privadas.
    Add(AddArgs),
    /// Multiplica una lista de escalares (o frases) leída de la entrada estándar.
    Mul(MulArgs),
    /// Barre sub-rangos aleatorios sucesivos dentro de un rango padre.
    Rnd(RndArgs),
    /// Genera un filtro de Bloom binario a partir de un censo de texto.
    BlfGen(BlfGenArgs),
    /// Consulta membresía de hashes HASH160 contra un filtro de Bloom binario.
    BlfCheck(BlfCheckArgs),
    /// Banco de pruebas de las primitivas aritméticas y geométricas.
    Bench,
    /// Banco de pruebas de la tabla de ventana fija del generador.
    BenchGtable,
    /// Verificación cruzada entre la multiplicación genérica y la tabla del generador.
    MultVerify,
}

/// Banderas compartidas por los tres motores de barrido (`add`, `mul`, `rnd`).
#[derive(Args, Clone)]
pub struct SharedSearchArgs {
    /// Archivo de filtro: `.blf` para un filtro de Bloom binario, cualquier
    /// otra extensión para un censo de texto de hashes HASH160 por línea.
    #[arg(short = 'f', long = "filter")]
    pub filter: PathBuf,

    /// Archivo de salida, tabulado, para cada hallazgo.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Cantidad de hilos de trabajo. Por defecto, la cuenta de CPUs lógicas.
    #[arg(short = 't', long = "threads")]
    pub threads: Option<usize>,

    /// Codificación(es) de dirección a auditar: `c` (comprimida), `u` (sin
    /// comprimir), o `cu` (ambas).
    #[arg(short = 'a', long = "addr", default_value = "c")]
    pub addr: String,

    /// Modo silencioso: suprime la línea de estado periódica. Requiere `-o`.
    #[arg(short = 'q', long = "quiet", default_value_t = false)]
    pub quiet: bool,
}

impl SharedSearchArgs {
    /// Traduce `-a` en `(auditar_comprimida, auditar_sin_comprimir)`.
    pub fn addr_selection(&self) -> Result<(bool, bool), CliError> {
        match self.addr.as_str() {
            "c" => Ok((true, false)),
            "u" => Ok((false, true)),
            "cu" | "uc" => Ok((true, true)),
            other => Err(CliError::InvalidRange(format!(
                "tipo de dirección desconocido: '{other}' (use c, u, o cu)"
            ))),
        }
    }
}

/// Argumentos del subcomando `add`.
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub shared: SharedSearchArgs,

    /// Rango `inicio:fin` en hexadecimal. Por defecto, `[1024, n)`.
    #[arg(short = 'r', long = "range")]
    pub range: Option<String>,

    /// Ventana de dígitos `offset:tamaño`. Por defecto se deriva del rango.
    #[arg(short = 'd', long = "digest-window")]
    pub digest_window: Option<String>,

    /// Expande cada candidato con sus cinco compañeros del endomorfismo GLV.
    #[arg(long = "endo", default_value_t = false)]
    pub endo: bool,
}

/// Argumentos del subcomando `mul`.
#[derive(Args)]
pub struct MulArgs {
    #[command(flatten)]
    pub shared: SharedSearchArgs,

    /// Trata cada línea de entrada como texto crudo (SHA-256 de la línea,
    /// no un escalar hexadecimal) antes de derivar la llave privada.
    #[arg(long = "raw", default_value_t = false)]
    pub raw: bool,
}

/// Argumentos del subcomando `rnd`.
#[derive(Args)]
pub struct RndArgs {
    #[command(flatten)]
    pub shared: SharedSearchArgs,

    /// Rango padre `inicio:fin` en hexadecimal del que se muestrean sub-rangos.
    #[arg(short = 'r', long = "range")]
    pub range: Option<String>,

    /// Ventana de dígitos `offset:tamaño` del sub-rango. Por defecto se
    /// elige un desplazamiento aleatorio con el tamaño derivado del rango.
    #[arg(short = 'd', long = "digest-window")]
    pub digest_window: Option<String>,

    /// Semilla determinista para el generador pseudoaleatorio (en vez de `/dev/urandom`).
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

/// Argumentos del subcomando `blf-gen`. Las entradas (un HASH160
/// hexadecimal por línea) se leen de la entrada estándar.
#[derive(Args)]
pub struct BlfGenArgs {
    /// Cantidad esperada de entradas, usada para dimensionar el filtro.
    #[arg(short = 'n', long = "count")]
    pub expected_items: u64,

    /// Archivo de filtro de Bloom binario a escribir.
    #[arg(short = 'o', long = "output")]
    pub output: PathBuf,

    /// Tasa de falso positivo objetivo.
    #[arg(long = "fp-rate", default_value_t = 0.000_001)]
    pub false_positive_rate: f64,
}

/// Argumentos del subcomando `blf-check`.
#[derive(Args)]
pub struct BlfCheckArgs {
    /// Archivo de filtro de Bloom binario a consultar.
    #[arg(short = 'f', long = "filter")]
    pub filter: PathBuf,

    /// Hashes HASH160 hexadecimales a consultar. Si se omiten, se leen de stdin.
    pub hashes: Vec<String>,
}
