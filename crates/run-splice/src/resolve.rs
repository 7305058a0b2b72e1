use log::trace;

use crate::chars::char_len;
use crate::container::{RunList, RunText};

/// Where a paragraph offset lands: the run owning it and the offset inside
/// that run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPosition {
    pub run: usize,
    pub offset: usize,
}

/// Cumulative run lengths of one paragraph, in chars.
///
/// Built fresh from the paragraph every time it is needed. Every splice
/// invalidates offsets, so nothing here is ever cached across edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSpans {
    ends: Vec<usize>,
}

impl RunSpans {
    pub fn of<P: RunList + ?Sized>(para: &P) -> Self {
        let mut total = 0usize;
        let ends = para
            .runs()
            .iter()
            .map(|run| {
                total += char_len(run.text());
                total
            })
            .collect();
        Self { ends }
    }

    pub fn run_count(&self) -> usize {
        self.ends.len()
    }

    pub fn total(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn start_of(&self, run: usize) -> usize {
        match run.checked_sub(1) {
            Some(prev) => self.ends.get(prev).copied().unwrap_or_else(|| self.total()),
            None => 0,
        }
    }

    pub fn end_of(&self, run: usize) -> usize {
        self.ends.get(run).copied().unwrap_or_else(|| self.total())
    }

    /// The run holding the char at `pos`: the first run whose cumulative end
    /// exceeds `pos`. Empty runs never own a char.
    pub fn resolve(&self, pos: usize) -> Option<RunPosition> {
        if pos >= self.total() {
            return None;
        }
        let run = self.ends.iter().position(|&end| end > pos)?;
        Some(RunPosition {
            run,
            offset: pos - self.start_of(run),
        })
    }

    /// The run that receives text inserted at `pos`: the first run whose
    /// cumulative end reaches `pos`. On a boundary between two runs this is
    /// the run ending there, so inserted text extends the left run.
    pub fn insertion_point(&self, pos: usize) -> Option<RunPosition> {
        let run = self.ends.iter().position(|&end| end >= pos)?;
        Some(RunPosition {
            run,
            offset: pos - self.start_of(run),
        })
    }
}

pub fn resolve<P: RunList + ?Sized>(para: &P, pos: usize) -> Option<RunPosition> {
    let found = RunSpans::of(para).resolve(pos);
    trace!("resolved offset {pos} to {found:?}");
    found
}

/// Index of the run containing the char at `pos`, or `None` when `pos` is
/// outside `[0, len)`.
pub fn run_index_at<P: RunList + ?Sized>(para: &P, pos: usize) -> Option<usize> {
    resolve(para, pos).map(|p| p.run)
}

/// Offset of `pos` inside the run that contains it.
pub fn local_offset_at<P: RunList + ?Sized>(para: &P, pos: usize) -> Option<usize> {
    resolve(para, pos).map(|p| p.offset)
}
