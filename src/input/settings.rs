use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{HeatbrushError, HeatbrushResult};

/// Accepted brush radius, in logical points.
pub const BRUSH_RADIUS_RANGE: RangeInclusive<f64> = 6.0..=120.0;
/// Accepted heat rate.
pub const HEAT_RATE_RANGE: RangeInclusive<f64> = 0.1..=10.0;
/// Accepted undo depth.
pub const MAX_UNDO_RANGE: RangeInclusive<usize> = 10..=100;

/// Stamp opacity per unit of heat rate.
pub const OPACITY_PER_HEAT_RATE: f64 = 0.05;

/// User-tunable brush configuration.
///
/// Out-of-range values are rejected, never clamped.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    /// Dab radius in logical points.
    pub brush_radius: f64,
    /// Heat multiplier; each dab deposits `0.05 * heat_rate` opacity at its centre.
    pub heat_rate: f64,
    /// Number of strokes that can be undone.
    pub max_undo_steps: usize,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            brush_radius: 40.0,
            heat_rate: 0.6,
            max_undo_steps: 50,
        }
    }
}

impl BrushSettings {
    /// Reject non-finite or out-of-range values.
    pub fn validate(&self) -> HeatbrushResult<()> {
        check_f64("brush_radius", self.brush_radius, &BRUSH_RADIUS_RANGE)?;
        check_f64("heat_rate", self.heat_rate, &HEAT_RATE_RANGE)?;
        if !MAX_UNDO_RANGE.contains(&self.max_undo_steps) {
            return Err(HeatbrushError::validation(format!(
                "max_undo_steps must be an integer between {} and {}, got {}",
                MAX_UNDO_RANGE.start(),
                MAX_UNDO_RANGE.end(),
                self.max_undo_steps
            )));
        }
        Ok(())
    }

    /// Copy with a new radius, validated.
    pub fn with_brush_radius(mut self, v: f64) -> HeatbrushResult<Self> {
        self.brush_radius = v;
        self.validate()?;
        Ok(self)
    }

    /// Copy with a new heat rate, validated.
    pub fn with_heat_rate(mut self, v: f64) -> HeatbrushResult<Self> {
        self.heat_rate = v;
        self.validate()?;
        Ok(self)
    }

    /// Copy with a new undo depth, validated.
    pub fn with_max_undo_steps(mut self, v: usize) -> HeatbrushResult<Self> {
        self.max_undo_steps = v;
        self.validate()?;
        Ok(self)
    }

    /// Opacity at the centre of each dab.
    pub fn stamp_opacity(&self) -> f64 {
        (OPACITY_PER_HEAT_RATE * self.heat_rate).clamp(0.0, 1.0)
    }

    /// Parse and validate settings JSON. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> HeatbrushResult<Self> {
        let s: Self = serde_json::from_reader(r)
            .map_err(|e| HeatbrushError::serde(format!("parse brush settings JSON: {e}")))?;
        s.validate()?;
        Ok(s)
    }

    /// Read settings JSON from a file.
    pub fn from_path(path: impl AsRef<Path>) -> HeatbrushResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open brush settings '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }
}

fn check_f64(name: &str, v: f64, range: &RangeInclusive<f64>) -> HeatbrushResult<()> {
    if v.is_finite() && range.contains(&v) {
        return Ok(());
    }
    Err(HeatbrushError::validation(format!(
        "{name} must be between {} and {}, got {v}",
        range.start(),
        range.end()
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/input/settings.rs"]
mod tests;
