// [apps/cli/src/main.rs]
/*!
 * =================================================================
 * APARATO: PROSPECTOR CLI SHELL (SHELL)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: BOOTSTRAP, DESPACHO DE MODO, Y SEÑALES DE SISTEMA
 *
 * Punto de ignición síncrono: no hay runtime asíncrono en este binario,
 * cada motor (`add`/`mul`/`rnd`) administra sus propios hilos nativos
 * vía `std::thread::scope`. `Ctrl-C` marca `SearchContext::stop_requested`,
 * que los motores consultan en los límites de cada lote de trabajo.
 * =================================================================
 */

use std::io::BufReader;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use prospector_cli_lib::cli::{Cli, Mode};
use prospector_cli_lib::context::SearchContext;
use prospector_cli_lib::cpu_manager::resolve_thread_count;
use prospector_cli_lib::diagnostics;
use prospector_cli_lib::engine::{mul, rnd, sweep};
use prospector_cli_lib::filter_io::{load_filter, run_blf_check, run_blf_gen};
use prospector_cli_lib::range::{self, default_range, default_window, parse_digest_window, parse_hex_range, stride_from_offset};

fn main() -> Result<()> {
    prospector_shared_heimdall::init_tracing("prospector");

    let cli = Cli::parse();

    match cli.mode {
        Mode::Add(args) => run_add(args),
        Mode::Mul(args) => run_mul(args),
        Mode::Rnd(args) => run_rnd(args),
        Mode::BlfGen(args) => run_blf_gen(&args).context("fallo en blf-gen"),
        Mode::BlfCheck(args) => run_blf_check(&args).context("fallo en blf-check"),
        Mode::Bench => {
            diagnostics::run_bench();
            Ok(())
        }
        Mode::BenchGtable => {
            diagnostics::run_bench_gtable();
            Ok(())
        }
        Mode::MultVerify => diagnostics::run_mult_verify().map_err(anyhow::Error::msg),
    }
}

fn install_ctrlc_handler(context: &Arc<SearchContext>) -> Result<()> {
    let context_for_handler = Arc::clone(context);
    ctrlc::set_handler(move || {
        tracing::warn!("señal de interrupción recibida, deteniendo el barrido...");
        context_for_handler.stop_requested.store(true, Ordering::SeqCst);
    })
    .context("no se pudo instalar el manejador de Ctrl-C")
}

fn run_add(args: prospector_cli_lib::cli::AddArgs) -> Result<()> {
    let (check_compressed, check_uncompressed) = args.shared.addr_selection()?;
    let filter = load_filter(&args.shared.filter)?;
    let context = Arc::new(SearchContext::new(
        filter,
        check_compressed,
        check_uncompressed,
        args.endo,
        args.shared.quiet,
        args.shared.output.as_deref(),
    )?);
    install_ctrlc_handler(&context)?;

    let (range_s, range_e) = match &args.range {
        Some(text) => parse_hex_range(text)?,
        None => default_range(),
    };

    let range_bits = range::bit_length(&range_e);
    let (ord_offs, _ord_size) = match &args.digest_window {
        Some(text) => parse_digest_window(text)?,
        None => default_window(range_bits),
    };
    let stride = stride_from_offset(ord_offs)?;

    let thread_count = resolve_thread_count(args.shared.threads);
    tracing::info!(thread_count, check_compressed, check_uncompressed, endo = args.endo, "iniciando barrido add");

    sweep::run(&context, range_s, range_e, stride, thread_count).map_err(|error| anyhow::anyhow!("{error}"))
}

fn run_mul(args: prospector_cli_lib::cli::MulArgs) -> Result<()> {
    let (check_compressed, check_uncompressed) = args.shared.addr_selection()?;
    let filter = load_filter(&args.shared.filter)?;
    let context = Arc::new(SearchContext::new(
        filter,
        check_compressed,
        check_uncompressed,
        false,
        args.shared.quiet,
        args.shared.output.as_deref(),
    )?);
    install_ctrlc_handler(&context)?;

    let thread_count = resolve_thread_count(args.shared.threads);
    tracing::info!(thread_count, raw = args.raw, "iniciando lista de escalares");

    let stdin = std::io::stdin();
    mul::run(context, BufReader::new(stdin), args.raw, thread_count);
    Ok(())
}

fn run_rnd(args: prospector_cli_lib::cli::RndArgs) -> Result<()> {
    let (check_compressed, check_uncompressed) = args.shared.addr_selection()?;
    let filter = load_filter(&args.shared.filter)?;
    let context = Arc::new(SearchContext::new(
        filter,
        check_compressed,
        check_uncompressed,
        false,
        args.shared.quiet,
        args.shared.output.as_deref(),
    )?);
    install_ctrlc_handler(&context)?;

    let (parent_s, parent_e) = match &args.range {
        Some(text) => parse_hex_range(text)?,
        None => default_range(),
    };

    let range_bits = range::bit_length(&parent_e);
    let (ord_offs, ord_size) = match &args.digest_window {
        Some(text) => parse_digest_window(text)?,
        None => {
            let (_, default_size) = default_window(range_bits);
            let max_offset = range::max_window_offset(range_bits, default_size);
            let offset = match args.seed {
                Some(seed) => (seed % max_offset as u64) as u32,
                None => rand::random::<u32>() % max_offset,
            };
            (offset, default_size)
        }
    };
    let ord_offs = ord_offs.min(255u32.saturating_sub(ord_size));
    let stride = stride_from_offset(ord_offs)?;

    let thread_count = resolve_thread_count(args.shared.threads);
    tracing::info!(thread_count, ord_offs, ord_size, "iniciando barrido de sub-rangos aleatorios");
    eprintln!("[RANDOM MODE] offs: {ord_offs} ~ bits: {ord_size}\n");

    rnd::run(context, parent_s, parent_e, stride, ord_offs, ord_size, thread_count, args.seed)
        .map_err(|error| anyhow::anyhow!("{error}"))
}
