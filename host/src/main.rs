//! Reference test-vector harness for xorshift128+.
//!
//! Usage:
//!   xorshift-vectors generate <s1> <s0> <output file>
//!   xorshift-vectors check <s1> <s0> <output file>
//!
//! `generate` writes one output word per line to the output file and the
//! post-step state words to `state0.txt` / `state1.txt`. `check` reads the same
//! three files (e.g. dumped by an HDL simulation) and reports the first step
//! where they diverge from this implementation.

use anyhow::Result;
use clap::Parser;
use host::cli::{Cli, Commands};
use host::util::seed_to_hex;
use host::{check_vectors, generate_vectors, write_journal, HarnessConfig, VectorPaths};
use xorshift_core::VectorJournal;

fn print_summary(journal: &VectorJournal, paths: &VectorPaths) {
    println!("seed_s1={}", seed_to_hex(journal.seed_slot1));
    println!("seed_s0={}", seed_to_hex(journal.seed_slot0));
    println!("steps={}", journal.count);
    println!(
        "final_state={:016x}:{:016x}",
        journal.final_state.s0, journal.final_state.s1
    );
    println!("fingerprint={:#018x}", journal.output_fingerprint);
    println!("output={}", paths.output.display());
    println!("state0={}", paths.state0.display());
    println!("state1={}", paths.state1.display());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let Cli { command } = Cli::parse();
    let config = HarnessConfig::from_env();
    let is_check = matches!(command, Commands::Check { .. });
    let run = command.resolve(&config)?;

    let journal = if is_check {
        let options = &run.options;
        let journal = check_vectors(
            options.seed_slot1,
            options.seed_slot0,
            options.seed_policy,
            &run.paths,
        )?;
        println!("match=true");
        journal
    } else {
        generate_vectors(&run.options, &run.paths)?
    };

    print_summary(&journal, &run.paths);

    if let Some(path) = &run.json_out {
        write_journal(path, &journal)?;
        println!("journal={}", path.display());
    }

    Ok(())
}
