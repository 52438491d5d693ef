use epi_core::EpiError;
use epi_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid outbreak configuration: {0}")]
    Config(#[from] EpiError),

    #[error("{what} count {got} does not match population size {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("contact network error: {0}")]
    Network(#[from] NetworkError),

    #[error("outbreak already finished on day {0}")]
    Finished(epi_core::Day),
}

pub type SimResult<T> = Result<T, SimError>;
