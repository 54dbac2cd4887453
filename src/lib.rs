//! Heatbrush is a thermal-style heatmap brush engine.
//!
//! Pointer input is turned into soft radial dabs that accumulate in a single-channel
//! intensity buffer. The buffer is colour-mapped through a 256-entry heat palette for the live
//! view, and composited over white paper (and an optional background photo) for export.
//!
//! # Pipeline overview
//!
//! 1. **Input**: `PointerEvent -> Stamp` (dab spacing via [`PointerSampler`])
//! 2. **Accumulate**: `Stamp -> AccumulationBuffer` with an undoable [`StrokesLog`]
//! 3. **Colorize**: `AccumulationBuffer + Palette -> FrameRGBA` (live view and export share it)
//! 4. **Compose**: white paper, background, auto-cropped heat layer, then JPEG or PNG bytes
//!
//! Public colours are straight (non-premultiplied) RGBA8; the compositor premultiplies layers
//! internally before resizing and blending.
//!
//! [`Editor`] owns all of the above for a single open artwork.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod editor;
mod foundation;
mod input;
mod palette;
mod render;
mod stroke;

pub use compose::background::Background;
pub use compose::blend::{over_opaque, over_opaque_in_place, premultiply_in_place};
pub use compose::bounds::{ContentScan, CropPolicy, PixelRect, crop_region, scan_content};
pub use compose::compositor::Compositor;
pub use compose::export::{
    ExportFormat, ExportOptions, MAX_OUTPUT_SIDE, OutputSize, PRINT_PX_PER_MM, encode, write_file,
};
pub use editor::{Editor, EditorOpts};
pub use foundation::core::{Canvas, MAX_CANVAS_SIDE, PixelSize, Point, Rect, Rgba8};
pub use foundation::error::{HeatbrushError, HeatbrushResult};
pub use input::event::PointerEvent;
pub use input::settings::{
    BRUSH_RADIUS_RANGE, BrushSettings, HEAT_RATE_RANGE, MAX_UNDO_RANGE, OPACITY_PER_HEAT_RATE,
};
pub use palette::gradient::{ColorStop, LinearGradient};
pub use palette::lut::{PALETTE_LEN, Palette, heat_stops};
pub use render::colorize::{colorize, colorize_into};
pub use render::frame::FrameRGBA;
pub use render::live::LiveView;
pub use stroke::accumulator::StrokeAccumulator;
pub use stroke::buffer::{AccumulationBuffer, HeatBlend};
pub use stroke::model::{Stamp, Stroke, StrokesLog};
pub use stroke::sampler::{DEFAULT_SPACING, PointerSampler};
