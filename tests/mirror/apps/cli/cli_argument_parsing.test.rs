// [tests/mirror/apps/cli/cli_argument_parsing.test.rs]
/**
 * =================================================================
 * APARATO: CLI ARGUMENT PARSING TEST (V1.0)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-WORKER MIRROR
 * RESPONSABILIDAD: CERTIFICAR LA SUPERFICIE DECLARATIVA DE CLAP
 * =================================================================
 */

use clap::Parser;
use prospector_cli_lib::prelude::{Cli, Mode};

#[test]
fn add_subcommand_parses_range_and_digest_window_flags() {
    println!("\n📐 [PROVING_GROUNDS]: Auditing `add` subcommand surface...");

    let parsed = Cli::parse_from([
        "prospector", "add", "-f", "census.blf", "-r", "100:200", "-d", "0:16", "--endo",
    ]);

    match parsed.mode {
        Mode::Add(args) => {
            assert_eq!(args.range.as_deref(), Some("100:200"));
            assert_eq!(args.digest_window.as_deref(), Some("0:16"));
            assert!(args.endo);
            assert_eq!(args.shared.filter.to_str().unwrap(), "census.blf");
        }
        _ => panic!("L1_CLI_FAULT: expected Mode::Add"),
    }

    println!("   ✅ [SUCCESS]: `add` surface certified.");
}

#[test]
fn mul_subcommand_defaults_raw_to_false() {
    let parsed = Cli::parse_from(["prospector", "mul", "-f", "census.txt"]);
    match parsed.mode {
        Mode::Mul(args) => assert!(!args.raw),
        _ => panic!("L1_CLI_FAULT: expected Mode::Mul"),
    }
}

#[test]
fn rnd_subcommand_accepts_a_deterministic_seed() {
    let parsed = Cli::parse_from(["prospector", "rnd", "-f", "census.blf", "--seed", "42"]);
    match parsed.mode {
        Mode::Rnd(args) => assert_eq!(args.seed, Some(42)),
        _ => panic!("L1_CLI_FAULT: expected Mode::Rnd"),
    }
}

#[test]
fn quiet_without_output_is_a_cli_level_concern_not_a_parse_error() {
    // `-q` sin `-o` es válido a nivel de gramática clap; la validación
    // semántica ocurre al construir `SearchContext`, no en el parser.
    let parsed = Cli::parse_from(["prospector", "add", "-f", "census.blf", "-q"]);
    match parsed.mode {
        Mode::Add(args) => assert!(args.shared.quiet),
        _ => panic!("L1_CLI_FAULT: expected Mode::Add"),
    }
}

#[test]
fn blf_gen_and_blf_check_subcommands_parse_their_own_flags() {
    let gen = Cli::parse_from(["prospector", "blf-gen", "-n", "1000", "-o", "out.blf"]);
    match gen.mode {
        Mode::BlfGen(args) => {
            assert_eq!(args.expected_items, 1000);
            assert_eq!(args.output.to_str().unwrap(), "out.blf");
        }
        _ => panic!("L1_CLI_FAULT: expected Mode::BlfGen"),
    }

    let check = Cli::parse_from(["prospector", "blf-check", "-f", "out.blf", "deadbeef"]);
    match check.mode {
        Mode::BlfCheck(args) => {
            assert_eq!(args.filter.to_str().unwrap(), "out.blf");
            assert_eq!(args.hashes, vec!["deadbeef".to_string()]);
        }
        _ => panic!("L1_CLI_FAULT: expected Mode::BlfCheck"),
    }
}

#[test]
fn diagnostic_subcommands_carry_no_payload() {
    assert!(matches!(Cli::parse_from(["prospector", "bench"]).mode, Mode::Bench));
    assert!(matches!(Cli::parse_from(["prospector", "bench-gtable"]).mode, Mode::BenchGtable));
    assert!(matches!(Cli::parse_from(["prospector", "mult-verify"]).mode, Mode::MultVerify));
}
