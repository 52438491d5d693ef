//! Network-construction error type.

use thiserror::Error;

use epi_core::AgentId;

/// Errors produced by `epi-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("cannot draw {degree} distinct contacts per agent from a population of {population}")]
    TooDense { degree: usize, population: usize },

    #[error("{len} contact entries is not a multiple of degree {degree}")]
    RaggedContacts { len: usize, degree: usize },

    #[error("contact {contact} is outside a population of {population}")]
    ContactOutOfRange { contact: AgentId, population: usize },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
