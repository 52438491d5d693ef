//! `Population` — the fixed agent array plus incrementally maintained
//! partitions.
//!
//! The living and infected subsets and the immune and dead counts are
//! updated at the moment an agent transitions, never recomputed by scanning.
//! All state changes therefore go through [`Population`] rather than through
//! `&mut Agent`, which is why no mutable agent accessor is exposed.

use epi_core::{AgentId, SimRng};

use crate::{Agent, AgentSet, Outcome};

// ── Census ────────────────────────────────────────────────────────────────────

/// Head counts at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    /// Original population size (never shrinks).
    pub population: usize,
    pub living:     usize,
    /// Living and infected.
    pub infected:   usize,
    /// Living and recovered.
    pub immune:     usize,
    pub dead:       usize,
}

impl Census {
    /// Infected share of the living population (`0` when nobody is alive).
    pub fn infected_fraction(&self) -> f64 {
        ratio(self.infected, self.living)
    }

    /// Immune share of the living population (`0` when nobody is alive).
    pub fn immune_fraction(&self) -> f64 {
        ratio(self.immune, self.living)
    }

    /// Deaths over the *original* population size, so it never decreases.
    pub fn death_fraction(&self) -> f64 {
        ratio(self.dead, self.population)
    }

    /// `true` when the whole population has died.
    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.living == 0
    }
}

/// `n / d` with `0 / 0 := 0`.
fn ratio(n: usize, d: usize) -> f64 {
    if d == 0 { 0.0 } else { n as f64 / d as f64 }
}

// ── Population ────────────────────────────────────────────────────────────────

pub struct Population {
    agents:   Vec<Agent>,
    living:   AgentSet,
    infected: AgentSet,
    immune:   usize,
    dead:     usize,
}

impl Population {
    /// `count` susceptible, living agents.
    pub fn new(count: usize) -> Self {
        Self {
            agents:   vec![Agent::new(); count],
            living:   AgentSet::full(count),
            infected: AgentSet::with_capacity(count),
            immune:   0,
            dead:     0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn is_alive(&self, id: AgentId) -> bool {
        self.agents[id.index()].is_alive()
    }

    /// Every living agent.
    #[inline]
    pub fn living(&self) -> &AgentSet {
        &self.living
    }

    /// Every living, infected agent.
    #[inline]
    pub fn infected(&self) -> &AgentSet {
        &self.infected
    }

    pub fn census(&self) -> Census {
        Census {
            population: self.agents.len(),
            living:     self.living.len(),
            infected:   self.infected.len(),
            immune:     self.immune,
            dead:       self.dead,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// [`Agent::expose`] plus partition bookkeeping.
    pub fn expose(&mut self, id: AgentId, illness_length: u32, r0: f64, rng: &mut SimRng) -> bool {
        let exposed = self.agents[id.index()].expose(illness_length, r0, rng);
        if exposed {
            self.infected.insert(id);
        }
        exposed
    }

    /// [`Agent::expose_unscheduled`] plus partition bookkeeping.
    pub fn expose_unscheduled(&mut self, id: AgentId) -> bool {
        let exposed = self.agents[id.index()].expose_unscheduled();
        if exposed {
            self.infected.insert(id);
        }
        exposed
    }

    /// [`Agent::step`] plus partition bookkeeping.
    pub fn step(&mut self, id: AgentId, illness_length: u32, ifr: f64, rng: &mut SimRng) -> Option<Outcome> {
        let outcome = self.agents[id.index()].step(illness_length, ifr, rng)?;
        self.infected.remove(id);
        match outcome {
            Outcome::Recovered => self.immune += 1,
            Outcome::Died => {
                self.living.remove(id);
                self.dead += 1;
            }
        }
        Some(outcome)
    }
}
