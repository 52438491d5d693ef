//! Disease parameters and closed-form epidemiological quantities.

use crate::{EpiError, EpiResult};

/// Default illness length in days when the caller does not supply one.
pub const DEFAULT_ILLNESS_LENGTH: u32 = 7;

/// Disease characteristics shared by every agent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseParams {
    /// Basic reproduction number: expected secondary infections per case
    /// over the whole infectious period.
    #[cfg_attr(feature = "serde", serde(rename = "R0"))]
    pub r0: f64,

    /// Infection fatality rate: probability an infection ends in death.
    pub ifr: f64,

    /// Days from infection to resolution.
    #[cfg_attr(feature = "serde", serde(default = "default_illness_length"))]
    pub illness_length: u32,
}

#[cfg(feature = "serde")]
fn default_illness_length() -> u32 {
    DEFAULT_ILLNESS_LENGTH
}

impl DiseaseParams {
    pub fn new(r0: f64, ifr: f64, illness_length: u32) -> Self {
        Self { r0, ifr, illness_length }
    }

    /// Range-check every field.
    pub fn validate(&self) -> EpiResult<()> {
        if !(self.r0.is_finite() && self.r0 > 0.0) {
            return Err(EpiError::invalid("R0", self.r0, "greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.ifr) {
            return Err(EpiError::invalid("ifr", self.ifr, "between 0 and 1"));
        }
        if self.illness_length == 0 {
            return Err(EpiError::invalid("illness_length", self.illness_length, "greater than 0"));
        }
        Ok(())
    }

    /// Herd-immunity threshold implied by `r0`.
    pub fn herd_immunity_threshold(&self) -> EpiResult<f64> {
        herd_immunity_threshold(self.r0)
    }
}

/// Fraction of a population that must be immune to halt sustained
/// transmission: `1 - 1/r0`.
///
/// Negative for `r0 < 1` (no immunity is needed).  Rejects `r0 <= 0` and
/// non-finite values.
pub fn herd_immunity_threshold(r0: f64) -> EpiResult<f64> {
    if !(r0.is_finite() && r0 > 0.0) {
        return Err(EpiError::invalid("R0", r0, "greater than 0"));
    }
    Ok(1.0 - 1.0 / r0)
}
