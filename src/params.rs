//! Parameter keys and the locally cached parameter mirror.
//!
//! The host owns the real parameter values. The panel keeps a mirror of them
//! for rendering and as the baseline for drags. Every write into the mirror
//! goes through [`clamp_unit`] (or the grid's range checks), so nothing
//! outside the legal range is ever rendered or sent back to the host.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_LEVEL_DIVISOR, GRID_LEVELS, GRID_SLICES};

/// Stable identifier of a host parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKey {
    MasterVolume,
    Pitch,
    Retrigger,
    Bitcrush,
    Distortion,
    Highpass,
    Lowpass,
}

impl ParamKey {
    /// Number of keys.
    pub const COUNT: usize = 7;

    /// Every key, in control-port order.
    pub const ALL: [ParamKey; Self::COUNT] = [
        Self::MasterVolume,
        Self::Pitch,
        Self::Retrigger,
        Self::Bitcrush,
        Self::Distortion,
        Self::Highpass,
        Self::Lowpass,
    ];

    /// Name used on the host interface.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MasterVolume => "master_volume",
            Self::Pitch => "pitch",
            Self::Retrigger => "retrigger",
            Self::Bitcrush => "bitcrush",
            Self::Distortion => "distortion",
            Self::Highpass => "highpass",
            Self::Lowpass => "lowpass",
        }
    }

    /// Control-port index of this parameter on the plugin.
    #[must_use]
    pub fn port(self) -> u32 {
        match self {
            Self::MasterVolume => 0,
            Self::Pitch => 1,
            Self::Retrigger => 2,
            Self::Bitcrush => 3,
            Self::Distortion => 4,
            Self::Highpass => 5,
            Self::Lowpass => 6,
        }
    }

    /// Reverse of [`ParamKey::port`].
    #[must_use]
    pub fn from_port(port: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.port() == port)
    }

    /// Value a control returns to on reset, and the mirror's initial value.
    #[must_use]
    pub fn default_value(self) -> f32 {
        match self {
            Self::MasterVolume => 0.7,
            Self::Pitch => 0.5,
            Self::Lowpass => 1.0,
            Self::Retrigger | Self::Bitcrush | Self::Distortion | Self::Highpass => 0.0,
        }
    }

    fn index(self) -> usize {
        self.port() as usize
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a host names a parameter the panel does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parameter: {0}")]
pub struct UnknownParam(pub String);

impl FromStr for ParamKey {
    type Err = UnknownParam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownParam(s.to_string()))
    }
}

/// Clamp into `[0, 1]`. NaN collapses to 0 so it can never reach the host.
#[must_use]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Pack a retrigger cell into the single float the DSP expects.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pack_retrigger(slice: usize, level: u8) -> f32 {
    slice as f32 + f32::from(level) / GRID_LEVEL_DIVISOR
}

/// Inverse of [`pack_retrigger`]. `None` when `value` names no valid cell.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn unpack_retrigger(value: f32) -> Option<(usize, u8)> {
    if !value.is_finite() || value < 0.0 || value >= GRID_SLICES as f32 {
        return None;
    }
    let slice = value.floor();
    let level = ((value - slice) * GRID_LEVEL_DIVISOR).round();
    if level >= GRID_LEVELS as f32 {
        return None;
    }
    Some((slice as usize, level as u8))
}

/// The panel's mirror of host parameter state.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterCache {
    values: [f32; ParamKey::COUNT],
    levels: [u8; GRID_SLICES],
}

impl Default for ParameterCache {
    fn default() -> Self {
        Self {
            values: ParamKey::ALL.map(ParamKey::default_value),
            levels: [0; GRID_SLICES],
        }
    }
}

impl ParameterCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`.
    ///
    /// For [`ParamKey::Retrigger`] this is the last cell written, packed.
    #[must_use]
    pub fn get(&self, key: ParamKey) -> f32 {
        self.values[key.index()]
    }

    /// Store a value and return what was stored.
    ///
    /// Dials clamp into `[0, 1]`. A retrigger value is unpacked and stored as
    /// a grid cell; one that names no cell leaves the cache unchanged.
    pub fn set(&mut self, key: ParamKey, value: f32) -> f32 {
        if key == ParamKey::Retrigger {
            return match unpack_retrigger(value) {
                Some((slice, level)) => {
                    let (slice, level) = self.set_level(slice, level);
                    pack_retrigger(slice, level)
                }
                None => self.get(key),
            };
        }
        let clamped = clamp_unit(value);
        self.values[key.index()] = clamped;
        clamped
    }

    /// Retrigger level of one slice. Out-of-range slices read as 0.
    #[must_use]
    pub fn level(&self, slice: usize) -> u8 {
        self.levels.get(slice).copied().unwrap_or(0)
    }

    /// All retrigger levels, slice 0 first.
    #[must_use]
    pub fn levels(&self) -> &[u8; GRID_SLICES] {
        &self.levels
    }

    /// Store a retrigger level, clamping both coordinates into the grid.
    ///
    /// Returns the cell actually written.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_level(&mut self, slice: usize, level: u8) -> (usize, u8) {
        let slice = slice.min(GRID_SLICES - 1);
        let level = level.min((GRID_LEVELS - 1) as u8);
        self.levels[slice] = level;
        self.values[ParamKey::Retrigger.index()] = pack_retrigger(slice, level);
        (slice, level)
    }
}
