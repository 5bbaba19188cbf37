use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use xorshift_core::SeedPolicy;

use crate::util::parse_seed;
use crate::{HarnessConfig, RunOptions, VectorPaths};

#[derive(Parser, Debug)]
#[command(name = "xorshift-vectors")]
#[command(about = "Generate and check xorshift128+ reference test vectors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct TraceArgs {
    /// Seed for state slot 1 (decimal, or hex with 0x prefix)
    pub s1: String,
    /// Seed for state slot 0 (decimal, or hex with 0x prefix)
    pub s0: String,
    /// File to write (or read) output words to
    pub output: PathBuf,
    /// State slot 0 trace file [env: XORSHIFT_STATE0_PATH, default: state0.txt]
    #[arg(long)]
    pub state0: Option<PathBuf>,
    /// State slot 1 trace file [env: XORSHIFT_STATE1_PATH, default: state1.txt]
    #[arg(long)]
    pub state1: Option<PathBuf>,
    /// Accept s1 = s0 = 0, which yields an all-zero trace
    #[arg(long)]
    pub allow_zero_seed: bool,
    /// Write a JSON summary of the run
    #[arg(long)]
    pub json_out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write output and state trace files
    Generate {
        #[command(flatten)]
        trace: TraceArgs,
        /// Number of advances [env: XORSHIFT_COUNT, default: 100]
        #[arg(long)]
        count: Option<usize>,
    },
    /// Compare existing trace files against a fresh run
    Check {
        #[command(flatten)]
        trace: TraceArgs,
    },
}

/// Command-line arguments merged with environment defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRun {
    pub options: RunOptions,
    pub paths: VectorPaths,
    pub json_out: Option<PathBuf>,
}

impl TraceArgs {
    /// Flags win over `config`. `count` is only given for `generate`; `check`
    /// takes its step count from the reference files.
    pub fn resolve(self, count: Option<usize>, config: &HarnessConfig) -> Result<ResolvedRun> {
        let seed_policy = if self.allow_zero_seed {
            SeedPolicy::Permit
        } else {
            config.seed_policy
        };

        Ok(ResolvedRun {
            options: RunOptions {
                seed_slot1: parse_seed(&self.s1)?,
                seed_slot0: parse_seed(&self.s0)?,
                count: count.unwrap_or(config.count),
                seed_policy,
            },
            paths: VectorPaths::new(
                self.output,
                self.state0.unwrap_or_else(|| config.state0_path.clone()),
                self.state1.unwrap_or_else(|| config.state1_path.clone()),
            ),
            json_out: self.json_out,
        })
    }
}

impl Commands {
    pub fn resolve(self, config: &HarnessConfig) -> Result<ResolvedRun> {
        match self {
            Self::Generate { trace, count } => trace.resolve(count, config),
            Self::Check { trace } => trace.resolve(None, config),
        }
    }
}
