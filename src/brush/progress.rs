//! Pull-driven progress sequences for brush application.
//!
//! Applying a brush never does work eagerly. It returns an iterator of
//! [`Progress`] steps, one per chunk. Step `i` is yielded *before* chunk `i` is
//! touched; the chunk is processed when the consumer asks for the following
//! step. Dropping the iterator early therefore leaves every chunk that has not
//! been processed exactly as it was.

use crate::selection::Selection;
use crate::voxel::chunk::ChunkPos;
use crate::voxel::world::Dimension;

/// One step of a long-running brush application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Zero-based index of the chunk about to be processed
    pub index: usize,
    /// Total number of steps in the sequence
    pub total: usize,
    pub message: &'static str,
}

impl Progress {
    /// Fraction of the work started so far, in `0.0..=1.0`
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.index as f32 / self.total as f32
        }
    }
}

/// Boxed progress sequence borrowing the world it mutates
pub type ProgressIter<'a> = Box<dyn Iterator<Item = Progress> + 'a>;

/// A sequence with no steps, for work that already happened
pub fn no_progress<'a>() -> ProgressIter<'a> {
    Box::new(std::iter::empty())
}

/// Pump a progress sequence to the end, returning the number of steps seen.
pub fn run_to_completion<I>(progress: I) -> usize
where
    I: IntoIterator<Item = Progress>,
{
    let mut steps = 0;
    for step in progress {
        log::debug!(
            "{} ({}/{}, {:.0}%)",
            step.message,
            step.index + 1,
            step.total,
            step.fraction() * 100.0
        );
        steps += 1;
    }
    steps
}

/// Per-chunk progress driver shared by the brush modes.
///
/// Holds the world exclusively for the whole run; `op` is called once per
/// chunk position, after that position's step has been yielded.
pub struct ChunkSteps<'w, F> {
    world: &'w mut dyn Dimension,
    selection: Box<dyn Selection + 'w>,
    positions: std::vec::IntoIter<ChunkPos>,
    total: usize,
    index: usize,
    pending: Option<ChunkPos>,
    message: &'static str,
    op: F,
}

impl<'w, F> ChunkSteps<'w, F>
where
    F: FnMut(&mut dyn Dimension, &dyn Selection, ChunkPos),
{
    pub fn new(
        world: &'w mut dyn Dimension,
        selection: Box<dyn Selection + 'w>,
        message: &'static str,
        op: F,
    ) -> Self {
        let total = selection.chunk_count();
        let positions = selection.chunk_positions().into_iter();
        Self {
            world,
            selection,
            positions,
            total,
            index: 0,
            pending: None,
            message,
            op,
        }
    }
}

impl<'w, F> Iterator for ChunkSteps<'w, F>
where
    F: FnMut(&mut dyn Dimension, &dyn Selection, ChunkPos),
{
    type Item = Progress;

    fn next(&mut self) -> Option<Progress> {
        if let Some(pos) = self.pending.take() {
            (self.op)(&mut *self.world, &*self.selection, pos);
        }

        let pos = self.positions.next()?;
        self.pending = Some(pos);
        let step = Progress {
            index: self.index,
            total: self.total,
            message: self.message,
        };
        self.index += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.positions.len();
        (remaining, Some(remaining))
    }
}
