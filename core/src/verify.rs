use core::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::constants::{FINGERPRINT_OFFSET, FINGERPRINT_PRIME};
use crate::error::{Stream, VectorError};
use crate::rng::{SeedPolicy, StateSnapshot, Xorshift128Plus};
use crate::trace::{produce, TraceSink, TraceStep};
use crate::vector::VectorSet;

/// Summary of one generated (or verified) run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorJournal {
    pub seed_slot1: u64,
    pub seed_slot0: u64,
    pub count: usize,
    pub first_word: Option<u64>,
    pub final_state: StateSnapshot,
    pub output_fingerprint: u64,
}

/// Builds a [`VectorJournal`] one step at a time, so callers that stream
/// vectors elsewhere (files, a socket) still get a summary.
#[derive(Clone, Copy, Debug)]
pub struct JournalRecorder {
    journal: VectorJournal,
}

impl JournalRecorder {
    pub fn new(seed_slot1: u64, seed_slot0: u64) -> Self {
        Self {
            journal: VectorJournal {
                seed_slot1,
                seed_slot0,
                count: 0,
                first_word: None,
                final_state: StateSnapshot::new(seed_slot0, seed_slot1),
                output_fingerprint: FINGERPRINT_OFFSET,
            },
        }
    }

    pub fn observe(&mut self, step: &TraceStep) {
        let journal = &mut self.journal;
        journal.count += 1;
        journal.first_word.get_or_insert(step.word);
        journal.final_state = step.state;
        journal.output_fingerprint = mix(journal.output_fingerprint, step.word);
    }

    pub fn finish(self) -> VectorJournal {
        self.journal
    }
}

impl TraceSink for JournalRecorder {
    type Error = Infallible;

    fn record(&mut self, step: &TraceStep) -> Result<(), Infallible> {
        self.observe(step);
        Ok(())
    }
}

#[inline]
fn mix(hash: u64, word: u64) -> u64 {
    hash.wrapping_mul(FINGERPRINT_PRIME) ^ word
}

/// FNV-1 style mix over the output words, for quick comparison of long runs.
pub fn fingerprint(words: &[u64]) -> u64 {
    words.iter().fold(FINGERPRINT_OFFSET, |hash, word| mix(hash, *word))
}

pub fn generate(
    seed_slot1: u64,
    seed_slot0: u64,
    count: usize,
    policy: SeedPolicy,
) -> Result<(VectorSet, VectorJournal), VectorError> {
    let mut rng = Xorshift128Plus::seed_with_policy(seed_slot1, seed_slot0, policy)?;
    let mut vectors = VectorSet::with_capacity(count);
    let mut recorder = JournalRecorder::new(seed_slot1, seed_slot0);
    for step in produce(&mut rng, count) {
        vectors.push(&step);
        recorder.observe(&step);
    }
    Ok((vectors, recorder.finish()))
}

/// Report the first divergence between two traces, checking the output
/// column first, then state0, then state1.
pub fn compare(expected: &VectorSet, actual: &VectorSet) -> Result<(), VectorError> {
    for stream in Stream::ALL {
        let want = expected.column(stream);
        let got = actual.column(stream);

        if let Some(index) = want.iter().zip(got).position(|(a, b)| a != b) {
            return Err(VectorError::WordMismatch {
                stream,
                index,
                expected: want[index],
                actual: got[index],
            });
        }
        if want.len() != got.len() {
            return Err(VectorError::LengthMismatch {
                stream,
                expected: want.len(),
                actual: got.len(),
            });
        }
    }
    Ok(())
}

/// Regenerate as many steps as `reference` holds and compare. An empty
/// reference is an error: it would match any seed.
pub fn verify_reference(
    seed_slot1: u64,
    seed_slot0: u64,
    policy: SeedPolicy,
    reference: &VectorSet,
) -> Result<VectorJournal, VectorError> {
    if reference.is_empty() {
        return Err(VectorError::EmptyReference);
    }
    for stream in [Stream::State0, Stream::State1] {
        let len = reference.column(stream).len();
        if len != reference.len() {
            return Err(VectorError::LengthMismatch {
                stream,
                expected: reference.len(),
                actual: len,
            });
        }
    }

    let (vectors, journal) = generate(seed_slot1, seed_slot0, reference.len(), policy)?;
    compare(&vectors, reference)?;
    Ok(journal)
}
