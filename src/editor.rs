use std::path::Path;

use crate::compose::background::Background;
use crate::compose::compositor::Compositor;
use crate::compose::export::{ExportOptions, OutputSize};
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::input::event::PointerEvent;
use crate::input::settings::BrushSettings;
use crate::palette::lut::Palette;
use crate::render::frame::FrameRGBA;
use crate::render::live::LiveView;
use crate::stroke::accumulator::StrokeAccumulator;
use crate::stroke::buffer::HeatBlend;
use crate::stroke::model::{Stamp, StrokesLog};
use crate::stroke::sampler::{DEFAULT_SPACING, PointerSampler};

/// Construction options for an [`Editor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorOpts {
    /// Drawing surface.
    pub canvas: Canvas,
    /// Initial brush settings.
    pub settings: BrushSettings,
    /// How overlapping dabs combine; fixed for the document.
    pub blend: HeatBlend,
    /// Maximum gap between consecutive dabs, in logical points.
    pub spacing: f64,
}

impl EditorOpts {
    /// Default settings, blend and spacing for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            settings: BrushSettings::default(),
            blend: HeatBlend::default(),
            spacing: DEFAULT_SPACING,
        }
    }
}

/// One open artwork: pointer handling, heat accumulation, live view and export.
///
/// Everything runs on the caller's thread. Pointer events mutate the heat buffer and mark the
/// live view dirty; the host drives repaints through [`Editor::on_display_refresh`].
#[derive(Debug)]
pub struct Editor {
    canvas: Canvas,
    settings: BrushSettings,
    sampler: PointerSampler,
    strokes: StrokeAccumulator,
    live: LiveView,
    compositor: Compositor,
    background: Option<Background>,
}

impl Editor {
    /// Open a blank artwork. Rejects invalid canvas or settings.
    pub fn new(opts: EditorOpts) -> HeatbrushResult<Self> {
        opts.canvas.validate()?;
        opts.settings.validate()?;
        let size = opts.canvas.device_size();
        let palette = Palette::heat();
        Ok(Self {
            canvas: opts.canvas,
            settings: opts.settings,
            sampler: PointerSampler::new(opts.spacing),
            strokes: StrokeAccumulator::new(
                size,
                opts.canvas.scale,
                opts.blend,
                opts.settings.max_undo_steps,
            )?,
            live: LiveView::new(size, palette.clone()),
            compositor: Compositor::new(palette),
            background: None,
        })
    }

    /// The drawing surface.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Current brush settings.
    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    /// Heat buffer, Strokes-Log and history.
    pub fn strokes(&self) -> &StrokeAccumulator {
        &self.strokes
    }

    /// The live surface.
    pub fn live_view(&self) -> &LiveView {
        &self.live
    }

    /// The export compositor.
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Swap the export compositor, e.g. to change the crop policy.
    pub fn set_compositor(&mut self, compositor: Compositor) {
        self.compositor = compositor;
    }

    /// Replace the brush settings. Invalid settings are rejected and leave the editor unchanged.
    pub fn set_settings(&mut self, settings: BrushSettings) -> HeatbrushResult<()> {
        settings.validate()?;
        self.strokes.set_max_undo(settings.max_undo_steps);
        self.settings = settings;
        Ok(())
    }

    /// Apply one pointer event. Non-finite coordinates are rejected before anything changes.
    pub fn handle(&mut self, ev: PointerEvent) -> HeatbrushResult<()> {
        match ev.validated()? {
            PointerEvent::Down { x, y } => {
                self.strokes.begin_stroke();
                self.sampler.reset();
                self.stamp_along(Point::new(x, y))
            }
            PointerEvent::Move { x, y } => {
                if !self.strokes.is_drawing() {
                    tracing::trace!(x, y, "move without an active stroke ignored");
                    return Ok(());
                }
                self.stamp_along(Point::new(x, y))
            }
            PointerEvent::Up | PointerEvent::Cancel => {
                self.strokes.end_stroke();
                self.sampler.reset();
                Ok(())
            }
        }
    }

    fn stamp_along(&mut self, p: Point) -> HeatbrushResult<()> {
        let radius = self.settings.brush_radius;
        let opacity = self.settings.stamp_opacity();
        // Dabs further than one radius outside the canvas cannot touch it.
        let reach = Rect::new(0.0, 0.0, self.canvas.width, self.canvas.height)
            .inflate(radius, radius);
        for q in self.sampler.push_within(p, reach) {
            self.strokes.add_stamp(Stamp::new(q.x, q.y, radius, opacity))?;
        }
        self.live.mark_dirty();
        Ok(())
    }

    /// Display-refresh hook; returns whether the live frame was repainted.
    pub fn on_display_refresh(&mut self) -> bool {
        self.live.on_display_refresh(self.strokes.buffer())
    }

    /// Last painted live frame.
    pub fn frame(&self) -> Option<&FrameRGBA> {
        self.live.frame()
    }

    /// Undo the newest stroke; `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let changed = self.strokes.undo();
        if changed {
            self.live.mark_dirty();
        }
        changed
    }

    /// Redo the last undone stroke; `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let changed = self.strokes.redo();
        if changed {
            self.live.mark_dirty();
        }
        changed
    }

    /// Erase everything, including history.
    pub fn clear(&mut self) {
        self.sampler.reset();
        self.strokes.clear();
        self.live.mark_dirty();
    }

    /// Set or remove the export background.
    pub fn set_background(&mut self, background: Option<Background>) {
        self.background = background;
    }

    /// Load a background image; on failure the editor continues without one.
    pub fn load_background(&mut self, path: impl AsRef<Path>) -> bool {
        self.background = Background::load_or_none(path);
        self.background.is_some()
    }

    /// Current export background.
    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    /// Replace the artwork with `log`.
    pub fn load_strokes(&mut self, log: StrokesLog) -> HeatbrushResult<()> {
        self.sampler.reset();
        self.strokes.load(log)?;
        self.live.mark_dirty();
        Ok(())
    }

    /// Replace the artwork with a saved Strokes-Log file.
    pub fn open(&mut self, path: impl AsRef<Path>) -> HeatbrushResult<()> {
        self.load_strokes(StrokesLog::from_path(path)?)
    }

    /// Persist the Strokes-Log. An empty canvas is refused.
    pub fn save(&mut self, path: impl AsRef<Path>) -> HeatbrushResult<()> {
        if self.strokes.log().is_empty() {
            return Err(HeatbrushError::validation("canvas is empty"));
        }
        self.strokes.log().to_path(path)?;
        self.strokes.mark_saved();
        Ok(())
    }

    /// Compose the artwork at `output` resolution.
    pub fn compose(&self, output: OutputSize) -> HeatbrushResult<FrameRGBA> {
        self.compositor
            .compose(self.strokes.buffer(), self.background.as_ref(), output)
    }

    /// Compose, encode and write the artwork to `path`.
    pub fn export_to_path(&self, opts: &ExportOptions, path: impl AsRef<Path>) -> HeatbrushResult<()> {
        self.compositor.export_to_path(
            self.strokes.buffer(),
            self.background.as_ref(),
            opts,
            path.as_ref(),
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/editor.rs"]
mod tests;
