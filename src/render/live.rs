use crate::foundation::core::PixelSize;
use crate::palette::lut::Palette;
use crate::render::colorize::colorize_into;
use crate::render::frame::FrameRGBA;
use crate::stroke::buffer::AccumulationBuffer;

/// The visible surface, repainted from the heat buffer at display-refresh cadence.
///
/// Input handlers only call [`LiveView::mark_dirty`]; the host's refresh callback calls
/// [`LiveView::on_display_refresh`], so any number of dabs between two refreshes costs a single
/// recolour pass.
#[derive(Debug)]
pub struct LiveView {
    surface: Option<FrameRGBA>,
    palette: Palette,
    dirty: bool,
    paints: u64,
}

impl LiveView {
    /// A zero-sized or unallocatable surface yields a no-op view that never paints.
    pub fn new(size: PixelSize, palette: Palette) -> Self {
        let surface = if size.is_empty() {
            tracing::warn!(
                width = size.width,
                height = size.height,
                "drawing surface unavailable; live rendering disabled"
            );
            None
        } else {
            match FrameRGBA::transparent(size) {
                Ok(f) => Some(f),
                Err(e) => {
                    tracing::warn!(error = %e, "cannot allocate live surface; live rendering disabled");
                    None
                }
            }
        };
        Self {
            surface,
            palette,
            dirty: false,
            paints: 0,
        }
    }

    /// False when the view degraded to a no-op.
    pub fn is_available(&self) -> bool {
        self.surface.is_some()
    }

    /// Palette used for repaints.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Request a repaint on the next refresh.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True when a repaint is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of recolour passes performed so far.
    pub fn paint_count(&self) -> u64 {
        self.paints
    }

    /// The last painted frame, if the surface exists.
    pub fn frame(&self) -> Option<&FrameRGBA> {
        self.surface.as_ref()
    }

    /// Display-refresh callback. Repaints only when dirty; returns whether it painted.
    ///
    /// A failed repaint leaves the view dirty so the next refresh retries.
    pub fn on_display_refresh(&mut self, heat: &AccumulationBuffer) -> bool {
        if !self.dirty {
            return false;
        }
        let Some(surface) = self.surface.as_mut() else {
            self.dirty = false;
            return false;
        };
        match colorize_into(heat, &self.palette, surface) {
            Ok(()) => {
                self.dirty = false;
                self.paints += 1;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping repaint");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/live.rs"]
mod tests;
