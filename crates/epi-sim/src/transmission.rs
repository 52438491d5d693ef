//! The transmission pass.
//!
//! The pass is split the same way as a tick's intent/apply phases:
//!
//! 1. **Select** (read-only, optionally parallel): every infected agent picks
//!    the contacts it exposes today.  Each agent samples with its own
//!    [`AgentRng`] seeded from the day seed, so the selection is independent
//!    of visiting order and thread count.
//! 2. **Apply** (sequential): the orchestrator exposes the selected targets
//!    in ascending infector order using the run's [`SimRng`].
//!
//! Exposure is idempotent and the network is never written during the pass,
//! so selecting from a fixed snapshot is equivalent to exposing as you go.

use epi_agent::{Census, Population};
use epi_core::{AgentId, AgentRng, DiseaseParams, SimRng};
use epi_network::ContactNetwork;

/// How infected agents reach the people they expose.
#[derive(Clone, Debug)]
pub enum TransmissionMode {
    /// Static contact lists and transmission schedules committed at exposure.
    Network(ContactNetwork),

    /// No persistent network: each day, each infected agent draws a contact
    /// count from a per-contact daily probability and exposes that many
    /// living agents chosen from the whole population.
    UniformMixing,
}

impl TransmissionMode {
    /// The contact network, if this mode has one.
    pub fn network(&self) -> Option<&ContactNetwork> {
        match self {
            TransmissionMode::Network(net) => Some(net),
            TransmissionMode::UniformMixing => None,
        }
    }

    /// Expose `target` the way this mode infects people.
    ///
    /// Network mode commits a transmission schedule; uniform mixing decides
    /// transmission day by day and so exposes without one.
    pub fn expose(
        &self,
        population: &mut Population,
        target:     AgentId,
        params:     &DiseaseParams,
        rng:        &mut SimRng,
    ) -> bool {
        match self {
            TransmissionMode::Network(_) => {
                population.expose(target, params.illness_length, params.r0, rng)
            }
            TransmissionMode::UniformMixing => population.expose_unscheduled(target),
        }
    }

    /// Select today's exposure targets for each agent in `infected`.
    ///
    /// Returns one list per infector, in the same order as `infected`.
    /// `census` must describe `population` as of the start of the day.
    pub fn select_targets(
        &self,
        population: &Population,
        params:     &DiseaseParams,
        census:     &Census,
        infected:   &[AgentId],
        day_seed:   u64,
    ) -> Vec<Vec<AgentId>> {
        let pick = |&agent: &AgentId| {
            let mut rng = AgentRng::new(day_seed, agent);
            match self {
                TransmissionMode::Network(net) => {
                    network_targets(net, population, agent, &mut rng)
                }
                TransmissionMode::UniformMixing => {
                    mixing_targets(population, params, census, &mut rng)
                }
            }
        };

        #[cfg(not(feature = "parallel"))]
        {
            infected.iter().map(pick).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            infected.par_iter().map(pick).collect()
        }
    }
}

/// Up to `transmit()` distinct living entries from `agent`'s contact list.
///
/// The due count is clamped to the living entries available.  Entries are
/// positions in the list, so a contact listed twice can be picked twice.
fn network_targets(
    net:        &ContactNetwork,
    population: &Population,
    agent:      AgentId,
    rng:        &mut AgentRng,
) -> Vec<AgentId> {
    let due = population.agent(agent).transmit();
    if due == 0 {
        return Vec::new();
    }
    let living: Vec<AgentId> = net
        .contacts(agent)
        .iter()
        .copied()
        .filter(|&c| population.is_alive(c))
        .collect();
    rng.sample_indices(living.len(), due)
        .into_iter()
        .map(|i| living[i])
        .collect()
}

/// Contacts drawn from the whole living population for one infected agent.
fn mixing_targets(
    population: &Population,
    params:     &DiseaseParams,
    census:     &Census,
    rng:        &mut AgentRng,
) -> Vec<AgentId> {
    let count = mixing_contact_count(params, census.living, rng);
    let living = population.living().as_slice();
    rng.sample_indices(living.len(), count)
        .into_iter()
        .map(|i| living[i])
        .collect()
}

/// Per-contact daily transmission probability under uniform mixing.
///
/// Spreads the per-contact probability `r0 / living` (capped at 1) evenly
/// over the illness: `1 - (1 - r0 / living)^(1 / illness_length)`.
pub fn daily_contact_probability(params: &DiseaseParams, living: usize) -> f64 {
    if living == 0 {
        return 0.0;
    }
    let per_contact = (params.r0 / living as f64).min(1.0);
    1.0 - (1.0 - per_contact).powf(1.0 / f64::from(params.illness_length))
}

/// Today's contact count for one infected agent under uniform mixing.
///
/// The expected count `living * p` is used as is when at least 1; below 1 it
/// becomes a single contact with that probability.
fn mixing_contact_count(params: &DiseaseParams, living: usize, rng: &mut AgentRng) -> usize {
    let expected = living as f64 * daily_contact_probability(params, living);
    if expected < 1.0 {
        usize::from(rng.gen_bool(expected))
    } else {
        expected.floor() as usize
    }
}
