use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use xorshift_core::{
    produce_into, verify_reference, JournalRecorder, SeedPolicy, VectorJournal, Xorshift128Plus,
};

pub mod cli;
pub mod config;
pub mod files;
pub mod util;

pub use config::HarnessConfig;
pub use files::{read_reference, TraceFiles, VectorPaths};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    pub seed_slot1: u64,
    pub seed_slot0: u64,
    pub count: usize,
    pub seed_policy: SeedPolicy,
}

fn seed(options: &RunOptions) -> Result<Xorshift128Plus> {
    let rng = Xorshift128Plus::seed_with_policy(
        options.seed_slot1,
        options.seed_slot0,
        options.seed_policy,
    )
    .context("both seed words are zero; pass --allow-zero-seed to reproduce an all-zero trace")?;

    if rng.is_degenerate() {
        tracing::warn!("seeding with (0, 0): every output word and state will be zero");
    }
    Ok(rng)
}

/// Run the generator and write the output and state streams to `paths`.
pub fn generate_vectors(options: &RunOptions, paths: &VectorPaths) -> Result<VectorJournal> {
    let mut rng = seed(options)?;
    tracing::info!(
        seed_slot1 = options.seed_slot1,
        seed_slot0 = options.seed_slot0,
        count = options.count,
        "generating test vectors"
    );

    let mut files = TraceFiles::create(
        paths,
        JournalRecorder::new(options.seed_slot1, options.seed_slot0),
    )?;
    let written = produce_into(&mut rng, options.count, &mut files)
        .with_context(|| format!("failed writing test vectors to {}", paths.output.display()))?;
    let journal = files.finish().context("failed flushing test vectors")?;

    tracing::debug!(written, "test vectors written");
    Ok(journal)
}

/// Compare an existing trace against a fresh run with the same seeds.
/// The step count is taken from the reference.
pub fn check_vectors(
    seed_slot1: u64,
    seed_slot0: u64,
    seed_policy: SeedPolicy,
    paths: &VectorPaths,
) -> Result<VectorJournal> {
    let reference = read_reference(paths)?;
    tracing::info!(
        steps = reference.len(),
        output = %paths.output.display(),
        "checking reference trace"
    );

    let journal = verify_reference(seed_slot1, seed_slot0, seed_policy, &reference)
        .with_context(|| {
            format!(
                "reference trace {} does not match seeds ({seed_slot1}, {seed_slot0})",
                paths.output.display()
            )
        })?;
    Ok(journal)
}

pub fn write_journal(path: &Path, journal: &VectorJournal) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating {}", parent.display()))?;
    }
    let json = serde_json::to_vec_pretty(journal).context("failed to serialize journal json")?;
    fs::write(path, json)
        .with_context(|| format!("failed writing journal output: {}", path.display()))?;
    Ok(())
}
