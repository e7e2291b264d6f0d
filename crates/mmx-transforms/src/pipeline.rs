//! Per-channel adstock-then-saturation pipeline.
//!
//! Each marketing channel is transformed independently:
//! carry-over first, then diminishing returns.  The resulting per-channel
//! effect series are the regressors consumed by an external fitting stage.

use std::collections::BTreeMap;

use mmx_core::errors::{Error, Result};
use mmx_core::{ensure, Real, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::adstock::{geometric_adstock, AdstockParameters};
use crate::saturation::{hill_saturation, SaturationParameters};

/// The full transform configuration for a single channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelParameters {
    /// Carry-over parameters.
    pub adstock: AdstockParameters,
    /// Diminishing-returns parameters.
    pub saturation: SaturationParameters,
}

impl ChannelParameters {
    /// Bundle adstock and saturation parameters for one channel.
    pub fn new(adstock: AdstockParameters, saturation: SaturationParameters) -> Self {
        Self {
            adstock,
            saturation,
        }
    }
}

/// Transform every channel's spend series into its saturated effect series.
///
/// Channels are processed independently; nothing is shared between them,
/// and map iteration order does not affect the output values.  Each
/// output series has the same length as that channel's input.
///
/// # Errors
/// Fails with [`Error::Configuration`] – before producing any output –
/// if a channel in `channels` has no entry in `params`.  Parameter
/// entries for channels absent from `channels` are ignored.  Otherwise
/// propagates the validation errors of the underlying transforms.
pub fn transform_channels(
    channels: &BTreeMap<String, Vec<Real>>,
    params: &BTreeMap<String, ChannelParameters>,
) -> Result<BTreeMap<String, Vec<Real>>> {
    for channel in channels.keys() {
        ensure!(
            params.contains_key(channel),
            Error::Configuration {
                channel: channel.clone(),
            }
        );
    }

    let mut effects = BTreeMap::new();
    for (channel, spend) in channels {
        let p = &params[channel];
        let transformed = adstock_and_saturation(
            spend,
            p.adstock.alpha,
            p.saturation.half_saturation,
            p.adstock.max_lag,
            p.saturation.slope,
        )?;
        effects.insert(channel.clone(), transformed);
    }
    Ok(effects)
}

/// Single-channel convenience: adstock then saturation in one call.
///
/// Produces results identical to composing [`geometric_adstock`] and
/// [`hill_saturation`] directly.
///
/// # Errors
/// Propagates the validation errors of the two transforms.
pub fn adstock_and_saturation(
    spend: &[Real],
    alpha: Real,
    half_saturation: Real,
    max_lag: Size,
    slope: Real,
) -> Result<Vec<Real>> {
    let adstocked = geometric_adstock(spend, alpha, max_lag)?;
    hill_saturation(&adstocked, half_saturation, slope)
}
