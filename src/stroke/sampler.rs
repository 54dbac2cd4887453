use crate::foundation::core::{Point, Rect};

/// Gap threshold between consecutive dabs, in logical points.
pub const DEFAULT_SPACING: f64 = 2.0;

/// Straight-line subdivision of raw pointer samples so fast moves leave no gaps.
#[derive(Clone, Debug)]
pub struct PointerSampler {
    spacing: f64,
    last: Option<Point>,
}

impl Default for PointerSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SPACING)
    }
}

impl PointerSampler {
    /// Non-positive or non-finite spacing falls back to [`DEFAULT_SPACING`].
    pub fn new(spacing: f64) -> Self {
        let spacing = if spacing.is_finite() && spacing > 0.0 {
            spacing
        } else {
            DEFAULT_SPACING
        };
        Self {
            spacing,
            last: None,
        }
    }

    /// Maximum distance between two emitted dabs.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Forget the previous sample; the next call starts a fresh stroke.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Feed one raw sample and return the dab positions to stamp, ending at `p`.
    pub fn push(&mut self, p: Point) -> Vec<Point> {
        let Some(last) = self.last.replace(p) else {
            return vec![p];
        };
        subdivide(last, p, self.spacing)
    }

    /// Like [`PointerSampler::push`], but only the part of the segment inside `bounds` is
    /// stamped. The dab count is therefore bounded by the size of `bounds`, however far the
    /// pointer jumps.
    pub fn push_within(&mut self, p: Point, bounds: Rect) -> Vec<Point> {
        let Some(last) = self.last.replace(p) else {
            return if contains(bounds, p) { vec![p] } else { Vec::new() };
        };
        let Some((t0, t1)) = clip_segment(last, p, bounds) else {
            return Vec::new();
        };
        let (a, b) = (last.lerp(p, t0), last.lerp(p, t1));
        let mut out = Vec::new();
        if t0 > 0.0 {
            out.push(a);
            if a.distance(b) > 0.0 {
                out.extend(subdivide(a, b, self.spacing));
            }
        } else {
            out.extend(subdivide(a, b, self.spacing));
        }
        out
    }
}

fn subdivide(a: Point, b: Point, spacing: f64) -> Vec<Point> {
    let dist = a.distance(b);
    if dist <= spacing {
        return vec![b];
    }
    let steps = (dist / spacing).ceil() as usize;
    (1..=steps)
        .map(|i| a.lerp(b, i as f64 / steps as f64))
        .collect()
}

fn contains(r: Rect, p: Point) -> bool {
    (r.x0..=r.x1).contains(&p.x) && (r.y0..=r.y1).contains(&p.y)
}

/// Liang-Barsky clip of `a..b` against `r`, as a parameter range on the segment.
fn clip_segment(a: Point, b: Point, r: Rect) -> Option<(f64, f64)> {
    let d = b - a;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-d.x, a.x - r.x0),
        (d.x, r.x1 - a.x),
        (-d.y, a.y - r.y0),
        (d.y, r.y1 - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }
    Some((t0, t1))
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/sampler.rs"]
mod tests;
