use crate::foundation::core::PixelSize;
use crate::foundation::error::{HeatbrushError, HeatbrushResult};
use crate::stroke::buffer::{AccumulationBuffer, HeatBlend};
use crate::stroke::model::{Stamp, Stroke, StrokesLog};

/// Owns the accumulation buffer together with the Strokes-Log and undo/redo history.
///
/// Invariant: replaying every stamp of the log, in order, against a blank buffer reproduces
/// [`StrokeAccumulator::buffer`] exactly. At most `max_undo` of the newest strokes can be
/// undone; older strokes are baked (still replayed, no longer undoable).
#[derive(Clone, Debug)]
pub struct StrokeAccumulator {
    buffer: AccumulationBuffer,
    log: StrokesLog,
    current: Option<Stroke>,
    redo: Vec<Stroke>,
    max_undo: usize,
    baked: usize,
    unsaved: bool,
}

impl StrokeAccumulator {
    /// An empty document with a blank `size` buffer.
    pub fn new(
        size: PixelSize,
        scale: f64,
        blend: HeatBlend,
        max_undo: usize,
    ) -> HeatbrushResult<Self> {
        Ok(Self {
            buffer: AccumulationBuffer::new(size, scale, blend)?,
            log: StrokesLog::new(),
            current: None,
            redo: Vec::new(),
            max_undo,
            baked: 0,
            unsaved: false,
        })
    }

    /// The heat buffer.
    pub fn buffer(&self) -> &AccumulationBuffer {
        &self.buffer
    }

    /// Every committed stroke, oldest first.
    pub fn log(&self) -> &StrokesLog {
        &self.log
    }

    /// Current undo depth limit.
    pub fn max_undo(&self) -> usize {
        self.max_undo
    }

    /// True between `begin_stroke` and `end_stroke`.
    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// Number of strokes that can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.log.len() - self.baked
    }

    /// Number of strokes that can be redone.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// True when [`StrokeAccumulator::undo`] would change anything.
    pub fn can_undo(&self) -> bool {
        self.undo_depth() > 0
    }

    /// True when [`StrokeAccumulator::redo`] would change anything.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// True when the document changed since the last [`StrokeAccumulator::mark_saved`].
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Record that the current document has been persisted.
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    /// Change the undo depth, baking strokes that fall outside the new window.
    pub fn set_max_undo(&mut self, max_undo: usize) {
        self.max_undo = max_undo;
        self.enforce_undo_bound();
        // The top of the redo stack is the next stroke to redo; drop from the bottom.
        let excess = self.redo.len().saturating_sub(max_undo);
        self.redo.drain(..excess);
    }

    /// Start a new stroke. A stroke still in progress is committed first.
    pub fn begin_stroke(&mut self) {
        if self.current.is_some() {
            self.end_stroke();
        }
        self.current = Some(Stroke::new());
    }

    /// Append a stamp to the current stroke and rasterize it immediately.
    pub fn add_stamp(&mut self, stamp: Stamp) -> HeatbrushResult<()> {
        stamp.validate()?;
        let Some(current) = self.current.as_mut() else {
            return Err(HeatbrushError::validation("add_stamp called outside a stroke"));
        };
        current.push(stamp);
        self.buffer.stamp(&stamp);
        Ok(())
    }

    /// Commit the current stroke. Returns `false` when there was nothing to commit.
    pub fn end_stroke(&mut self) -> bool {
        let Some(stroke) = self.current.take() else {
            return false;
        };
        if stroke.is_empty() {
            return false;
        }
        self.log.push(stroke);
        self.redo.clear();
        self.enforce_undo_bound();
        self.unsaved = true;
        true
    }

    /// Remove the newest undoable stroke and rebuild the buffer from the log.
    pub fn undo(&mut self) -> bool {
        self.end_stroke();
        if !self.can_undo() {
            return false;
        }
        let Some(stroke) = self.log.pop() else {
            return false;
        };
        self.redo.push(stroke);
        self.replay();
        self.unsaved = true;
        true
    }

    /// Re-apply the most recently undone stroke on top of the current buffer.
    pub fn redo(&mut self) -> bool {
        self.end_stroke();
        let Some(stroke) = self.redo.pop() else {
            return false;
        };
        for stamp in stroke.stamps() {
            self.buffer.stamp(stamp);
        }
        self.log.push(stroke);
        self.enforce_undo_bound();
        self.unsaved = true;
        true
    }

    /// Drop all strokes and history.
    pub fn clear(&mut self) {
        self.current = None;
        self.log.clear();
        self.redo.clear();
        self.baked = 0;
        self.buffer.clear();
        self.unsaved = true;
    }

    /// Replace the document with `log` and rebuild the buffer.
    pub fn load(&mut self, log: StrokesLog) -> HeatbrushResult<()> {
        log.validate()?;
        self.current = None;
        self.log = log;
        self.redo.clear();
        self.baked = 0;
        self.enforce_undo_bound();
        self.replay();
        self.unsaved = false;
        Ok(())
    }

    /// Clear the buffer and rasterize every logged stamp in order.
    #[tracing::instrument(skip(self), fields(strokes = self.log.len()))]
    pub fn replay(&mut self) {
        self.buffer.clear();
        for stamp in self.log.stamps() {
            self.buffer.stamp(stamp);
        }
        if let Some(current) = &self.current {
            for stamp in current.stamps() {
                self.buffer.stamp(stamp);
            }
        }
    }

    fn enforce_undo_bound(&mut self) {
        let undoable = self.log.len().saturating_sub(self.baked);
        if undoable > self.max_undo {
            self.baked += undoable - self.max_undo;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/accumulator.rs"]
mod tests;
