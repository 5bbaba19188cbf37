#![cfg_attr(not(feature = "std"), no_std)]

//! xorshift128+ with a step-by-step trace of its output and internal state.
//!
//! The textual vectors produced here are meant to be compared line-for-line
//! against an independent implementation of the same generator (for example
//! an HDL simulation). The generator is not cryptographically secure.

extern crate alloc;

pub mod constants;
pub mod error;
pub mod rng;
pub mod trace;
pub mod vector;
pub mod verify;

pub use error::{SeedError, Stream, VectorError};
pub use rng::{advance_state, SeedPolicy, StateSnapshot, Xorshift128Plus};
pub use trace::{produce, produce_into, Sequence, TraceSink, TraceStep};
pub use vector::{format_word, parse_stream, render_stream, VectorSet};
pub use verify::{
    compare, fingerprint, generate, verify_reference, JournalRecorder, VectorJournal,
};
