//! The `Outbreak` struct and its daily loop.

use log::{debug, info, trace};

use epi_agent::Population;
use epi_core::{AgentId, Day, OutbreakConfig, SimRng};

use crate::{
    DayRecord, HistoryRecord, OutbreakObserver, SimError, SimResult, StabilityDetector,
    TransmissionMode,
};

/// What happened at the end of one call to [`Outbreak::advance_day`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayOutcome {
    /// More days remain.
    Continue,
    /// The stability rule fired; the day was recorded and nothing else ran.
    BurnedOut,
    /// The day was the last one allowed by `config.max_days`.
    HorizonReached,
}

/// A single outbreak run.
///
/// `Outbreak` owns the population, its contact network, the run's RNG, and
/// the history, and drives the five-phase daily loop described in the crate
/// docs.  Create via [`OutbreakBuilder`][crate::OutbreakBuilder], which also
/// seeds the initial infections.
pub struct Outbreak {
    /// Validated run configuration.
    pub config: OutbreakConfig,

    pub(crate) population: Population,
    pub(crate) mode:       TransmissionMode,
    pub(crate) rng:        SimRng,
    pub(crate) history:    HistoryRecord,
    pub(crate) stability:  StabilityDetector,
    pub(crate) day:        Day,
    pub(crate) finished:   bool,
}

impl Outbreak {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run day by day until burnout or `config.max_days`, then return the
    /// full history.
    ///
    /// Calls observer hooks at every day boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// Fails with [`SimError::Finished`] if the run has already ended.
    pub fn run<O: OutbreakObserver>(&mut self, observer: &mut O) -> SimResult<HistoryRecord> {
        info!(
            "starting outbreak: {} agents, {}, R0 {}, IFR {}, illness {} days, up to {} days",
            self.population.len(),
            self.mode_name(),
            self.config.params.r0,
            self.config.params.ifr,
            self.config.params.illness_length,
            self.config.max_days,
        );
        loop {
            match self.advance_day(observer)? {
                DayOutcome::Continue => {}
                DayOutcome::BurnedOut | DayOutcome::HorizonReached => break,
            }
        }
        observer.on_run_end(&self.history);
        if let Some(last) = self.history.last() {
            info!(
                "outbreak ended after {} days: immune {:.4}, deaths {:.4}",
                self.history.len(),
                last.immune,
                last.deaths,
            );
        }
        Ok(self.history.clone())
    }

    /// Run exactly one day.
    ///
    /// Useful for tests and incremental stepping.  Fails with
    /// [`SimError::Finished`] once a previous call returned anything other
    /// than [`DayOutcome::Continue`].
    pub fn advance_day<O: OutbreakObserver>(&mut self, observer: &mut O) -> SimResult<DayOutcome> {
        if self.finished {
            return Err(SimError::Finished(self.day));
        }
        let day = self.day;
        observer.on_day_start(day);

        // ── Phase 1–2: census and record ──────────────────────────────────
        let census = self.population.census();
        let record = DayRecord::from_census(day, &census);
        self.history.push(record);
        observer.on_day_recorded(&record, &census);
        debug!(
            "{day}: living {} infected {} immune {} dead {}",
            census.living, census.infected, census.immune, census.dead
        );

        // ── Phase 3: stability ────────────────────────────────────────────
        if self.stability.observe(day, record.infected) {
            info!("outbreak burned out on {day}");
            self.finished = true;
            observer.on_burnout(day);
            return Ok(DayOutcome::BurnedOut);
        }

        // Snapshot of today's infected agents, shared by both passes.
        let infected = self.population.infected().to_sorted_vec();

        // ── Phase 4: transmission ─────────────────────────────────────────
        let day_seed: u64 = self.rng.random();
        let targets = self.mode.select_targets(
            &self.population,
            &self.config.params,
            &census,
            &infected,
            day_seed,
        );
        let exposed = self.apply_exposures(targets);

        // ── Phase 5: progression ──────────────────────────────────────────
        //
        // Only agents infected before today's transmission pass advance, so
        // an agent exposed today starts tomorrow at days_infected = 0.
        let resolved = self.progress(&infected);
        trace!("{day}: {exposed} new infections, {resolved} resolved");

        self.day = day.next();
        if self.day.0 >= self.config.max_days {
            self.finished = true;
            return Ok(DayOutcome::HorizonReached);
        }
        Ok(DayOutcome::Continue)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The next day to be simulated.
    pub fn day(&self) -> Day {
        self.day
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn mode(&self) -> &TransmissionMode {
        &self.mode
    }

    pub fn history(&self) -> &HistoryRecord {
        &self.history
    }

    fn mode_name(&self) -> String {
        match self.mode.network() {
            Some(net) => format!("contact network of degree {}", net.degree()),
            None => "uniform mixing".to_owned(),
        }
    }

    // ── Passes ────────────────────────────────────────────────────────────

    /// Expose every selected target, infector by infector.  Returns the
    /// number of agents that became infected.
    fn apply_exposures(&mut self, targets: Vec<Vec<AgentId>>) -> usize {
        let mut exposed = 0;
        for target in targets.into_iter().flatten() {
            if self.mode.expose(&mut self.population, target, &self.config.params, &mut self.rng) {
                exposed += 1;
            }
        }
        exposed
    }

    /// Advance each agent in `infected`.  Returns how many resolved.
    fn progress(&mut self, infected: &[AgentId]) -> usize {
        let illness_length = self.config.params.illness_length;
        let ifr = self.config.params.ifr;
        let mut resolved = 0;
        for &agent in infected {
            if self.population.step(agent, illness_length, ifr, &mut self.rng).is_some() {
                resolved += 1;
            }
        }
        resolved
    }
}
