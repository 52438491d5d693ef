//! Top-level run configuration.

use crate::params::DiseaseParams;
use crate::{EpiError, EpiResult};

/// Default simulation horizon in days.
pub const DEFAULT_MAX_DAYS: u32 = 365;

/// How contact lists are drawn when the network is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NetworkSampling {
    /// Uniform draws with replacement from the whole population.  An agent
    /// may appear in its own list and the same contact may appear twice.
    #[default]
    WithReplacement,

    /// Distinct contacts, never the agent itself.
    Distinct,
}

/// Everything needed to run one outbreak.
///
/// Typically parsed from CLI flags or a JSON file by the application crate,
/// validated, and handed to `epi_sim::OutbreakBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutbreakConfig {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub params: DiseaseParams,

    /// Number of agents.  Fixed for the run.
    pub population_size: usize,

    /// Contacts per agent.  `0` selects uniform mixing (no persistent network).
    #[cfg_attr(feature = "serde", serde(default))]
    pub network_size: usize,

    /// Upper bound on recorded days.
    #[cfg_attr(feature = "serde", serde(default = "default_max_days"))]
    pub max_days: u32,

    /// Master RNG seed.  `None` draws one from OS entropy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub network_sampling: NetworkSampling,
}

#[cfg(feature = "serde")]
fn default_max_days() -> u32 {
    DEFAULT_MAX_DAYS
}

impl OutbreakConfig {
    /// A uniform-mixing configuration with default horizon and no seed.
    pub fn new(params: DiseaseParams, population_size: usize) -> Self {
        Self {
            params,
            population_size,
            network_size:     0,
            max_days:         DEFAULT_MAX_DAYS,
            seed:             None,
            network_sampling: NetworkSampling::default(),
        }
    }

    pub fn with_network_size(mut self, network_size: usize) -> Self {
        self.network_size = network_size;
        self
    }

    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = max_days;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_network_sampling(mut self, sampling: NetworkSampling) -> Self {
        self.network_sampling = sampling;
        self
    }

    /// `true` when no persistent contact network is used.
    #[inline]
    pub fn is_uniform_mixing(&self) -> bool {
        self.network_size == 0
    }

    /// Range-check the disease parameters and the population dimensions.
    pub fn validate(&self) -> EpiResult<()> {
        self.params.validate()?;
        if self.population_size == 0 {
            return Err(EpiError::invalid("population_size", self.population_size, "greater than 0"));
        }
        if u32::try_from(self.population_size).is_err() {
            return Err(EpiError::invalid(
                "population_size",
                self.population_size,
                "addressable by a 32-bit agent id",
            ));
        }
        if self.network_size > self.population_size - 1 {
            return Err(EpiError::invalid(
                "network_size",
                self.network_size,
                "between 0 and population_size - 1",
            ));
        }
        if self.max_days == 0 {
            return Err(EpiError::Config("max_days must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse a JSON document without range checks.  Missing optional fields
    /// take their defaults.
    #[cfg(feature = "serde")]
    pub fn parse_json_str(json: &str) -> EpiResult<Self> {
        serde_json::from_str(json).map_err(|e| EpiError::Parse(e.to_string()))
    }

    /// Read a JSON file without range checks, for callers that adjust the
    /// result before calling [`validate`](Self::validate).
    #[cfg(feature = "serde")]
    pub fn read_json_file(path: impl AsRef<std::path::Path>) -> EpiResult<Self> {
        Self::parse_json_str(&std::fs::read_to_string(path)?)
    }

    /// Parse and validate a JSON document.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> EpiResult<Self> {
        let config = Self::parse_json_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> EpiResult<Self> {
        let config = Self::read_json_file(path)?;
        config.validate()?;
        Ok(config)
    }
}
