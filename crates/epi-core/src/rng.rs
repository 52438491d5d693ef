//! Deterministic simulation-level and per-agent RNG wrappers.
//!
//! # Determinism strategy
//!
//! A run owns exactly one [`SimRng`].  Every sequential random draw (initial
//! seeding, transmission schedules, death/recovery resolution) comes from it
//! in a fixed order, so a fixed seed reproduces the run bit for bit.
//!
//! The transmission pass is read-only and may run in parallel, so it cannot
//! share the `SimRng`.  Instead, once per day the orchestrator draws a day
//! seed and each infected agent gets its own [`AgentRng`] seeded by:
//!
//!   seed = day_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent ids uniformly across the seed space.  The
//! results of the pass therefore do not depend on thread count or on the
//! order in which agents are visited.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Helpers shared by both wrappers.  Each wraps a `SmallRng` in field `.0`.
macro_rules! rng_helpers {
    ($name:ident) => {
        impl $name {
            /// Sample a uniformly distributed value of any `Standard`-distributed type.
            #[inline]
            pub fn random<T>(&mut self) -> T
            where
                rand::distributions::Standard: rand::distributions::Distribution<T>,
            {
                self.0.r#gen()
            }

            /// Generate a value uniformly in `range`.
            #[inline]
            pub fn gen_range<T, R>(&mut self, range: R) -> T
            where
                T: rand::distributions::uniform::SampleUniform,
                R: rand::distributions::uniform::SampleRange<T>,
            {
                self.0.gen_range(range)
            }

            /// `true` with probability `p` (clamped to [0, 1]).
            #[inline]
            pub fn gen_bool(&mut self, p: f64) -> bool {
                self.0.gen_bool(p.clamp(0.0, 1.0))
            }

            /// `amount` distinct indices drawn uniformly from `0..len`.
            ///
            /// `amount` is clamped to `len`, so asking for more than exists
            /// returns every index (in random order) instead of panicking.
            pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
                let amount = amount.min(len);
                if amount == 0 {
                    return Vec::new();
                }
                rand::seq::index::sample(&mut self.0, len, amount).into_vec()
            }

            /// Round `x` to a neighbouring integer so that the expected result
            /// equals `x`: with `f = x - floor(x)`, returns `ceil(x)` with
            /// probability `f`, else `floor(x)`.  Negative and NaN inputs
            /// yield 0; inputs at or above `u32::MAX` saturate.
            pub fn round_probabilistic(&mut self, x: f64) -> u32 {
                let x = x.max(0.0);
                if x >= f64::from(u32::MAX) {
                    return u32::MAX;
                }
                let floor = x.floor();
                let frac = x - floor;
                let up = frac > 0.0 && self.gen_bool(frac);
                floor as u32 + u32::from(up)
            }
        }
    };
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG for the transmission pass.
///
/// Created fresh for each infected agent each day from the day seed; never
/// stored.  Each Rayon worker owns the `AgentRng`s of the agents it is
/// processing, so no synchronisation is needed.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from a day seed and an agent id.
    pub fn new(day_seed: u64, agent: AgentId) -> Self {
        let seed = day_seed ^ u64::from(agent.0).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }
}

rng_helpers!(AgentRng);

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG: the single injectable randomness source of a run.
///
/// Used only in sequential phases.  If you need parallel randomness, derive
/// per-agent [`AgentRng`]s from a seed drawn from this one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// An unseeded generator for production runs that do not need to be
    /// reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }
}

rng_helpers!(SimRng);
