//! `epi-network` — the static contact network.
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`network`]   | `ContactNetwork`, `ContactNetworkBuilder`             |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                    |

pub mod error;
pub mod network;


pub use error::{NetworkError, NetworkResult};
pub use network::{ContactNetwork, ContactNetworkBuilder};
