//! xorshift128+ generator.
//!
//! Step: `x = s[0]; y = s[1]; out = x + y; s[0] = y; y ^= y << 23;
//! s[1] = y ^ x ^ (y >> 18) ^ (x >> 5)`. All arithmetic is on 64-bit words
//! with wrapping addition, so any implementation that truncates to 64 bits
//! (software or HDL) produces the same sequence.

use serde::{Deserialize, Serialize};

use crate::constants::{SHIFT_LEFT, SHIFT_RIGHT_X, SHIFT_RIGHT_Y};
use crate::error::SeedError;

/// Both state words at one point in the sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub s0: u64,
    pub s1: u64,
}

impl StateSnapshot {
    pub const fn new(s0: u64, s1: u64) -> Self {
        Self { s0, s1 }
    }

    pub const fn is_zero(&self) -> bool {
        self.s0 == 0 && self.s1 == 0
    }
}

/// What to do with an all-zero seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    #[default]
    Reject,
    /// Keep the zero state. Every output is zero; only useful for
    /// reproducing legacy traces that were recorded this way.
    Permit,
}

impl SeedPolicy {
    pub fn check(self, snapshot: StateSnapshot) -> Result<(), SeedError> {
        match self {
            Self::Reject if snapshot.is_zero() => Err(SeedError::DegenerateSeed),
            _ => Ok(()),
        }
    }
}

/// Pure form of one advance: returns the output word and the next state.
///
/// Total over the whole 128-bit domain; the zero state maps to itself with
/// output 0.
#[inline]
pub const fn advance_state(state: StateSnapshot) -> (u64, StateSnapshot) {
    let x = state.s0;
    let mut y = state.s1;
    let word = x.wrapping_add(y);

    let s0 = y;
    y ^= y << SHIFT_LEFT;
    let s1 = y ^ x ^ (y >> SHIFT_RIGHT_Y) ^ (x >> SHIFT_RIGHT_X);

    (word, StateSnapshot { s0, s1 })
}

/// Serializes as `{"s": [s0, s1]}`. There is no `Deserialize`; restore
/// through [`Xorshift128Plus::from_snapshot`] so the seed policy applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Xorshift128Plus {
    s: [u64; 2],
}

impl Xorshift128Plus {
    /// Seed the generator. The first argument fills slot 1, the second fills
    /// slot 0, matching the argument order of the reference harness.
    pub fn seed(slot1_seed: u64, slot0_seed: u64) -> Result<Self, SeedError> {
        Self::seed_with_policy(slot1_seed, slot0_seed, SeedPolicy::Reject)
    }

    pub fn seed_with_policy(
        slot1_seed: u64,
        slot0_seed: u64,
        policy: SeedPolicy,
    ) -> Result<Self, SeedError> {
        Self::from_snapshot(StateSnapshot::new(slot0_seed, slot1_seed), policy)
    }

    /// Resume from a previously recorded state.
    pub fn from_snapshot(snapshot: StateSnapshot, policy: SeedPolicy) -> Result<Self, SeedError> {
        policy.check(snapshot)?;
        Ok(Self {
            s: [snapshot.s0, snapshot.s1],
        })
    }

    pub fn state(&self) -> StateSnapshot {
        StateSnapshot::new(self.s[0], self.s[1])
    }

    pub fn s0(&self) -> u64 {
        self.s[0]
    }

    pub fn s1(&self) -> u64 {
        self.s[1]
    }

    pub fn is_degenerate(&self) -> bool {
        self.state().is_zero()
    }

    /// Advance once and return the output word, computed from the state
    /// before this call's mutation.
    #[inline]
    pub fn advance(&mut self) -> u64 {
        let (word, next) = advance_state(self.state());
        self.s = [next.s0, next.s1];
        word
    }
}
