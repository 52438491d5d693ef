//! Fluent builder for constructing an [`Outbreak`].

use log::debug;

use epi_agent::Population;
use epi_core::{AgentId, Day, OutbreakConfig, SimRng};
use epi_network::{ContactNetwork, ContactNetworkBuilder};

use crate::{HistoryRecord, Outbreak, SimError, SimResult, StabilityDetector, TransmissionMode};

/// One initial infection per this many agents, rounded up.
pub const AGENTS_PER_INITIAL_INFECTION: usize = 500;

/// Fluent builder for [`Outbreak`].
///
/// # Required inputs
///
/// - [`OutbreakConfig`]: disease parameters, population size, network size, …
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                        |
/// |----------------------------|------------------------------------------------|
/// | `.rng(r)`                  | `SimRng::new(seed)`, or entropy if no seed     |
/// | `.network(n)`              | Sampled from `config.network_size`             |
/// | `.initial_infections(k)`   | `ceil(population_size / 500)`                  |
/// | `.stability(s)`            | `StabilityDetector::default()` (14 days, 2)    |
///
/// # Example
///
/// ```rust,ignore
/// let mut outbreak = OutbreakBuilder::new(config)
///     .rng(SimRng::new(7))
///     .build()?;
/// let history = outbreak.run(&mut NoopObserver)?;
/// ```
pub struct OutbreakBuilder {
    config:             OutbreakConfig,
    rng:                Option<SimRng>,
    network:            Option<ContactNetwork>,
    initial_infections: Option<usize>,
    stability:          StabilityDetector,
}

impl OutbreakBuilder {
    pub fn new(config: OutbreakConfig) -> Self {
        Self {
            config,
            rng:                None,
            network:            None,
            initial_infections: None,
            stability:          StabilityDetector::default(),
        }
    }

    /// Inject the randomness source.  Overrides `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Supply a pre-built contact network instead of sampling one.
    ///
    /// Must cover exactly `population_size` agents.  A network with degree 0
    /// selects uniform mixing regardless of `config.network_size`.
    pub fn network(mut self, network: ContactNetwork) -> Self {
        self.network = Some(network);
        self
    }

    /// Override how many agents are infected before day 0.
    pub fn initial_infections(mut self, count: usize) -> Self {
        self.initial_infections = Some(count);
        self
    }

    pub fn stability(mut self, stability: StabilityDetector) -> Self {
        self.stability = stability;
        self
    }

    /// Validate inputs, build the population and contact network, seed the
    /// initial infections, and return a ready-to-run [`Outbreak`].
    pub fn build(self) -> SimResult<Outbreak> {
        self.config.validate()?;
        let population_size = self.config.population_size;

        let mut rng = match (self.rng, self.config.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => SimRng::new(seed),
            (None, None) => SimRng::from_entropy(),
        };

        // ── Contact network ───────────────────────────────────────────────
        let network = match self.network {
            Some(net) => {
                if net.agent_count() != population_size {
                    return Err(SimError::AgentCountMismatch {
                        expected: population_size,
                        got:      net.agent_count(),
                        what:     "contact network agent",
                    });
                }
                net
            }
            None => ContactNetworkBuilder::new(population_size, self.config.network_size)
                .sampling(self.config.network_sampling)
                .build(&mut rng)?,
        };
        let mode = if network.degree() == 0 {
            TransmissionMode::UniformMixing
        } else {
            TransmissionMode::Network(network)
        };

        // ── Seed initial infections ───────────────────────────────────────
        let seeds = self
            .initial_infections
            .unwrap_or_else(|| population_size.div_ceil(AGENTS_PER_INITIAL_INFECTION));
        if seeds > population_size {
            return Err(SimError::AgentCountMismatch {
                expected: population_size,
                got:      seeds,
                what:     "initial infection",
            });
        }

        let mut population = Population::new(population_size);
        for i in rng.sample_indices(population_size, seeds) {
            mode.expose(&mut population, AgentId(i as u32), &self.config.params, &mut rng);
        }
        debug!("seeded {seeds} initial infections");

        Ok(Outbreak {
            config: self.config,
            population,
            mode,
            rng,
            history: HistoryRecord::new(),
            stability: self.stability,
            day: Day::ZERO,
            finished: false,
        })
    }
}
