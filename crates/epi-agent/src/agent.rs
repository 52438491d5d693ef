//! The per-agent infection state machine.
//!
//! ```text
//! Susceptible ──expose──▶ Infected ──step (days == illness_length)──▶ Recovered
//!                                                                 └─▶ Dead
//! ```
//!
//! `Recovered` and `Dead` are terminal.  Exposure of anything other than a
//! `Susceptible` agent is a no-op, so an agent is infected at most once.

use epi_core::SimRng;

/// Upper bound on the attempts a single schedule holds.  Network mode clamps
/// each day's attempts to the living contacts anyway, so larger counts only
/// cost memory.
pub const MAX_SCHEDULED_ATTEMPTS: u32 = 1 << 16;

// ── TransmissionSchedule ──────────────────────────────────────────────────────

/// Day-since-infection offsets on which an agent attempts transmission.
///
/// A multiset drawn once at exposure: the same offset may appear several
/// times, meaning several attempts on that day.  Kept sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransmissionSchedule(Vec<u32>);

impl TransmissionSchedule {
    /// An empty schedule (no pre-committed transmission attempts).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Draw `count` offsets uniformly with replacement from
    /// `1..=illness_length - 1`.
    ///
    /// Offset 0 is the day of exposure and offset `illness_length` is the day
    /// of resolution, so neither carries attempts.  For `illness_length < 2`
    /// the range is empty and so is the schedule.
    ///
    /// `count` is capped at [`MAX_SCHEDULED_ATTEMPTS`].
    pub fn draw(count: u32, illness_length: u32, rng: &mut SimRng) -> Self {
        if illness_length < 2 {
            return Self::empty();
        }
        let mut offsets: Vec<u32> = (0..count.min(MAX_SCHEDULED_ATTEMPTS))
            .map(|_| rng.gen_range(1..illness_length))
            .collect();
        offsets.sort_unstable();
        Self(offsets)
    }

    /// Number of attempts due on day offset `days_infected`.
    pub fn due_on(&self, days_infected: u32) -> usize {
        let lo = self.0.partition_point(|&d| d < days_infected);
        let hi = self.0.partition_point(|&d| d <= days_infected);
        hi - lo
    }

    /// Total attempts over the whole infectious period.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn offsets(&self) -> &[u32] {
        &self.0
    }
}

// ── Health ────────────────────────────────────────────────────────────────────

/// State carried while an agent is infected.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Infection {
    /// Days elapsed since exposure.  0 on the day of exposure.
    pub days_infected: u32,
    pub schedule:      TransmissionSchedule,
}

/// Disease state of one agent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Health {
    #[default]
    Susceptible,
    Infected(Infection),
    /// Immune; never infected again.
    Recovered,
    Dead,
}

/// How an infection resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Recovered,
    Died,
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One individual.  Contacts live in the contact network, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Agent {
    health: Health,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn health(&self) -> &Health {
        &self.health
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !matches!(self.health, Health::Dead)
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        matches!(self.health, Health::Infected(_))
    }

    #[inline]
    pub fn is_immune(&self) -> bool {
        matches!(self.health, Health::Recovered)
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        matches!(self.health, Health::Susceptible)
    }

    /// Days since exposure; `None` unless currently infected.
    pub fn days_infected(&self) -> Option<u32> {
        match &self.health {
            Health::Infected(inf) => Some(inf.days_infected),
            _ => None,
        }
    }

    /// Infect a susceptible agent and commit its transmission schedule.
    ///
    /// The schedule holds `round_probabilistic(r0)` attempts, so its expected
    /// size is exactly `r0`.  Returns `false` (and changes nothing) if the
    /// agent is not susceptible.
    pub fn expose(&mut self, illness_length: u32, r0: f64, rng: &mut SimRng) -> bool {
        if !self.is_susceptible() {
            return false;
        }
        let count = rng.round_probabilistic(r0);
        self.infect(TransmissionSchedule::draw(count, illness_length, rng));
        true
    }

    /// Infect a susceptible agent without a schedule.  Used by uniform
    /// mixing, where transmission is decided day by day.
    pub fn expose_unscheduled(&mut self) -> bool {
        if !self.is_susceptible() {
            return false;
        }
        self.infect(TransmissionSchedule::empty());
        true
    }

    fn infect(&mut self, schedule: TransmissionSchedule) {
        self.health = Health::Infected(Infection { days_infected: 0, schedule });
    }

    /// Transmission attempts due today.  Side-effect free; 0 unless infected.
    pub fn transmit(&self) -> usize {
        match &self.health {
            Health::Infected(inf) => inf.schedule.due_on(inf.days_infected),
            _ => 0,
        }
    }

    /// Advance the infection clock by one day.
    ///
    /// When the clock reaches `illness_length` the infection resolves: death
    /// with probability `ifr`, recovery otherwise.  Returns the outcome on
    /// the day of resolution and `None` on every other call, including all
    /// calls on non-infected agents.
    pub fn step(&mut self, illness_length: u32, ifr: f64, rng: &mut SimRng) -> Option<Outcome> {
        let Health::Infected(inf) = &mut self.health else {
            return None;
        };
        inf.days_infected += 1;
        if inf.days_infected < illness_length {
            return None;
        }
        let r: f64 = rng.random();
        if r < ifr {
            self.health = Health::Dead;
            Some(Outcome::Died)
        } else {
            self.health = Health::Recovered;
            Some(Outcome::Recovered)
        }
    }
}
