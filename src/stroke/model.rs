use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{HeatbrushError, HeatbrushResult};

/// A single circular brush dab, in logical points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stamp {
    /// Centre x, in logical points.
    pub x: f64,
    /// Centre y, in logical points.
    pub y: f64,
    /// Radius in logical points; serialized as `r`.
    #[serde(rename = "r")]
    pub radius: f64,
    /// Alpha at the centre, in `[0, 1]`.
    pub opacity: f64,
}

impl Stamp {
    /// A dab at `(x, y)`.
    pub fn new(x: f64, y: f64, radius: f64, opacity: f64) -> Self {
        Self {
            x,
            y,
            radius,
            opacity,
        }
    }

    /// Reject non-finite numbers, negative radii and opacity outside `[0, 1]`.
    pub fn validate(&self) -> HeatbrushResult<()> {
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(HeatbrushError::validation("stamp position must be finite"));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(HeatbrushError::validation(
                "stamp radius must be finite and >= 0",
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(HeatbrushError::validation("stamp opacity must be in [0, 1]"));
        }
        Ok(())
    }
}

/// The stamps of one continuous pointer gesture, in input order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    stamps: Vec<Stamp>,
}

impl Stroke {
    /// An empty stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stroke made of `stamps`.
    pub fn from_stamps(stamps: Vec<Stamp>) -> Self {
        Self { stamps }
    }

    /// Append a stamp.
    pub fn push(&mut self, stamp: Stamp) {
        self.stamps.push(stamp);
    }

    /// Stamps in input order.
    pub fn stamps(&self) -> &[Stamp] {
        &self.stamps
    }

    /// Number of stamps.
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    /// True when the stroke has no stamps.
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

/// Complete, replayable drawing history of one artwork.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StrokesLog {
    strokes: Vec<Stroke>,
}

impl StrokesLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A log made of `strokes`.
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// True when the log has no strokes.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Total stamps across all strokes.
    pub fn stamp_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// All stamps in replay order.
    pub fn stamps(&self) -> impl Iterator<Item = &Stamp> {
        self.strokes.iter().flat_map(|s| s.stamps().iter())
    }

    pub(crate) fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub(crate) fn pop(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Validate every stamp, naming the first bad one.
    pub fn validate(&self) -> HeatbrushResult<()> {
        for (si, stroke) in self.strokes.iter().enumerate() {
            for (pi, stamp) in stroke.stamps().iter().enumerate() {
                stamp.validate().map_err(|e| {
                    HeatbrushError::validation(format!("stroke {si} stamp {pi}: {e}"))
                })?;
            }
        }
        Ok(())
    }

    /// Parse a points file (array of strokes, each an array of `{x, y, r, opacity}`).
    pub fn from_reader<R: std::io::Read>(r: R) -> HeatbrushResult<Self> {
        let log: Self = serde_json::from_reader(r)
            .map_err(|e| HeatbrushError::serde(format!("parse strokes JSON: {e}")))?;
        log.validate()?;
        Ok(log)
    }

    /// Read a points file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> HeatbrushResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open strokes JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as a points file.
    pub fn to_writer<W: std::io::Write>(&self, w: W) -> HeatbrushResult<()> {
        serde_json::to_writer(w, self)
            .map_err(|e| HeatbrushError::serde(format!("write strokes JSON: {e}")))
    }

    /// Write a points file, creating parent directories.
    pub fn to_path(&self, path: impl AsRef<Path>) -> HeatbrushResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir '{}'", parent.display()))?;
        }
        let f = File::create(path)
            .with_context(|| format!("create strokes JSON '{}'", path.display()))?;
        self.to_writer(BufWriter::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/model.rs"]
mod tests;
