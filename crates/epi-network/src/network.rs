//! Contact network representation and builder.
//!
//! # Data layout
//!
//! Every agent has exactly `degree` contacts, so the adjacency lists are
//! stored back to back in one flat `Vec<AgentId>` with a fixed stride:
//!
//! ```text
//! contacts[ agent * degree .. (agent + 1) * degree ]
//! ```
//!
//! Lookup is a slice into contiguous memory with no per-agent allocation.  The
//! network is built once and never rewired, so it is shared read-only by the
//! transmission pass.

use log::debug;

use epi_core::{AgentId, NetworkSampling, SimRng};

use crate::{NetworkError, NetworkResult};

// ── ContactNetwork ────────────────────────────────────────────────────────────

/// Static per-agent list of candidate transmission targets.
///
/// Entries are non-owning references (indices) into the population.  Do not
/// construct directly; use [`ContactNetworkBuilder`], [`empty`](Self::empty),
/// or [`from_contacts`](Self::from_contacts).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactNetwork {
    agent_count: usize,
    degree:      usize,
    contacts:    Vec<AgentId>,
}

impl ContactNetwork {
    /// Shorthand for [`ContactNetworkBuilder`] with an explicit sampling mode.
    pub fn sample(
        agent_count: usize,
        degree:      usize,
        sampling:    NetworkSampling,
        rng:         &mut SimRng,
    ) -> NetworkResult<Self> {
        ContactNetworkBuilder::new(agent_count, degree).sampling(sampling).build(rng)
    }

    /// A network with no contacts for `agent_count` agents.
    ///
    /// Used in uniform-mixing mode, where contacts are drawn from the whole
    /// living population each day instead.
    pub fn empty(agent_count: usize) -> Self {
        Self { agent_count, degree: 0, contacts: Vec::new() }
    }

    /// Build from explicit flat adjacency lists of stride `degree`.
    pub fn from_contacts(agent_count: usize, degree: usize, contacts: Vec<AgentId>) -> NetworkResult<Self> {
        if contacts.len() != agent_count * degree {
            return Err(NetworkError::RaggedContacts { len: contacts.len(), degree });
        }
        if let Some(&contact) = contacts.iter().find(|c| c.index() >= agent_count) {
            return Err(NetworkError::ContactOutOfRange { contact, population: agent_count });
        }
        Ok(Self { agent_count, degree, contacts })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    /// Contacts per agent.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// `true` when no agent has any contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// The contact list of `agent`, in sampling order.
    #[inline]
    pub fn contacts(&self, agent: AgentId) -> &[AgentId] {
        let start = agent.index() * self.degree;
        &self.contacts[start..start + self.degree]
    }
}

// ── ContactNetworkBuilder ─────────────────────────────────────────────────────

/// Samples a [`ContactNetwork`] for a population.
///
/// # Example
///
/// ```rust
/// use epi_core::{NetworkSampling, SimRng};
/// use epi_network::ContactNetworkBuilder;
///
/// let mut rng = SimRng::new(42);
/// let network = ContactNetworkBuilder::new(1_000, 20)
///     .sampling(NetworkSampling::Distinct)
///     .build(&mut rng)
///     .unwrap();
/// assert_eq!(network.degree(), 20);
/// ```
pub struct ContactNetworkBuilder {
    agent_count: usize,
    degree:      usize,
    sampling:    NetworkSampling,
}

impl ContactNetworkBuilder {
    pub fn new(agent_count: usize, degree: usize) -> Self {
        Self { agent_count, degree, sampling: NetworkSampling::default() }
    }

    pub fn sampling(mut self, sampling: NetworkSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Draw every agent's contacts uniformly from the whole population.
    ///
    /// Agents are processed in ascending id order so the result depends only
    /// on the RNG state.
    pub fn build(self, rng: &mut SimRng) -> NetworkResult<ContactNetwork> {
        let Self { agent_count, degree, sampling } = self;
        if degree == 0 || agent_count == 0 {
            return Ok(ContactNetwork::empty(agent_count));
        }

        let mut contacts = Vec::with_capacity(agent_count * degree);
        match sampling {
            NetworkSampling::WithReplacement => {
                let n = agent_count as u32;
                contacts.extend((0..agent_count * degree).map(|_| AgentId(rng.gen_range(0..n))));
            }
            NetworkSampling::Distinct => {
                if degree > agent_count - 1 {
                    return Err(NetworkError::TooDense { degree, population: agent_count });
                }
                for agent in 0..agent_count {
                    // Draw from the other `agent_count - 1` slots and shift
                    // past `agent` to skip self.
                    contacts.extend(
                        rng.sample_indices(agent_count - 1, degree)
                            .into_iter()
                            .map(|i| if i >= agent { i + 1 } else { i })
                            .map(|i| AgentId(i as u32)),
                    );
                }
            }
        }

        debug!(
            "sampled contact network: {agent_count} agents x {degree} contacts ({sampling:?})"
        );
        Ok(ContactNetwork { agent_count, degree, contacts })
    }
}
