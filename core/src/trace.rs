use core::convert::Infallible;
use core::iter::FusedIterator;

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::rng::{StateSnapshot, Xorshift128Plus};

/// One advance: the word it produced and the state right after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub index: usize,
    pub word: u64,
    pub state: StateSnapshot,
}

/// Lazy run of `count` advances over a borrowed generator.
///
/// Not restartable: every item mutates the generator. Dropping the sequence
/// early leaves the generator at the last consumed step.
#[derive(Debug)]
pub struct Sequence<'a> {
    rng: &'a mut Xorshift128Plus,
    index: usize,
    count: usize,
}

pub fn produce(rng: &mut Xorshift128Plus, count: usize) -> Sequence<'_> {
    Sequence {
        rng,
        index: 0,
        count,
    }
}

impl Iterator for Sequence<'_> {
    type Item = TraceStep;

    fn next(&mut self) -> Option<TraceStep> {
        if self.index >= self.count {
            return None;
        }
        let word = self.rng.advance();
        let step = TraceStep {
            index: self.index,
            word,
            state: self.rng.state(),
        };
        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sequence<'_> {}

impl FusedIterator for Sequence<'_> {}

/// Observer for the advance loop. Implementors decide where steps go
/// (memory, files, a comparison against another trace).
pub trait TraceSink {
    type Error;

    fn record(&mut self, step: &TraceStep) -> Result<(), Self::Error>;
}

impl TraceSink for Vec<TraceStep> {
    type Error = Infallible;

    fn record(&mut self, step: &TraceStep) -> Result<(), Infallible> {
        self.push(*step);
        Ok(())
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    type Error = S::Error;

    fn record(&mut self, step: &TraceStep) -> Result<(), S::Error> {
        (**self).record(step)
    }
}

/// Drive `count` advances into `sink`. Stops at the first sink error; the
/// generator has then advanced exactly once past the last recorded step.
pub fn produce_into<S: TraceSink>(
    rng: &mut Xorshift128Plus,
    count: usize,
    mut sink: S,
) -> Result<usize, S::Error> {
    let mut recorded = 0usize;
    for step in produce(rng, count) {
        sink.record(&step)?;
        recorded += 1;
    }
    Ok(recorded)
}
