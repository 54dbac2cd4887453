use crate::foundation::core::Point;
use crate::foundation::error::{HeatbrushError, HeatbrushResult};

/// A pointer event after boundary validation. Coordinates are logical points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer pressed; starts a stroke.
    Down {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Pointer moved; extends the current stroke, if any.
    Move {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Pointer released; commits the stroke.
    Up,
    /// The host aborted the gesture; treated like `Up`.
    Cancel,
}

impl PointerEvent {
    /// Reject events whose coordinates are not finite.
    pub fn validated(self) -> HeatbrushResult<Self> {
        match self {
            Self::Down { x, y } | Self::Move { x, y } if !(x.is_finite() && y.is_finite()) => Err(
                HeatbrushError::validation(format!("pointer coordinates must be finite, got ({x}, {y})")),
            ),
            ev => Ok(ev),
        }
    }

    /// Pointer position for `Down` and `Move`.
    pub fn position(self) -> Option<Point> {
        match self {
            Self::Down { x, y } | Self::Move { x, y } => Some(Point::new(x, y)),
            Self::Up | Self::Cancel => None,
        }
    }

    /// Parse one JSON-encoded event, e.g. `{"type": "move", "x": 1, "y": 2}`.
    pub fn from_json(s: &str) -> HeatbrushResult<Self> {
        let ev: Self = serde_json::from_str(s)
            .map_err(|e| HeatbrushError::serde(format!("parse pointer event: {e}")))?;
        ev.validated()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/event.rs"]
mod tests;
