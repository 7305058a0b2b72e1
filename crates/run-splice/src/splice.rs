use log::debug;

use crate::chars::{char_len, char_slice, cut, insert_at};
use crate::container::{RunList, RunText};
use crate::error::SpliceError;
use crate::resolve::{RunPosition, RunSpans};

/// Inserts `text` at char offset `pos`.
///
/// The text joins the run found by [`RunSpans::insertion_point`] and takes on
/// its formatting. A paragraph without runs gets one default run.
pub fn insert<P: RunList + ?Sized>(
    para: &mut P,
    text: &str,
    pos: usize,
) -> Result<(), SpliceError> {
    let spans = RunSpans::of(para);
    if pos > spans.total() {
        return Err(SpliceError::OffsetOutOfRange {
            offset: pos,
            len: spans.total(),
        });
    }
    if text.is_empty() {
        return Ok(());
    }

    if spans.run_count() == 0 {
        let run = para.default_run(text.to_string());
        para.insert_run(0, run)?;
        return Ok(());
    }

    let at = spans
        .insertion_point(pos)
        .ok_or(SpliceError::UnresolvedRun { offset: pos })?;
    let run = para
        .run_mut(at.run)
        .ok_or(SpliceError::UnresolvedRun { offset: pos })?;
    let mut updated = run.text().to_string();
    insert_at(&mut updated, at.offset, text);
    run.set_text(updated);
    Ok(())
}

/// Removes the chars `[start, end]` (both inclusive).
///
/// Runs fully inside the range are detached, the boundary runs are trimmed,
/// and any boundary run left empty is detached as well.
pub fn remove<P: RunList + ?Sized>(
    para: &mut P,
    start: usize,
    end: usize,
) -> Result<(), SpliceError> {
    let (first, last) = resolve_range(para, start, end)?;

    if first.run == last.run {
        let run = para
            .run_mut(first.run)
            .ok_or(SpliceError::UnresolvedRun { offset: start })?;
        let updated = cut(run.text(), first.offset, last.offset + 1);
        run.set_text(updated);
        prune_empty(para, &[first.run])?;
        return Ok(());
    }

    if let Some(run) = para.run_mut(first.run) {
        let updated = cut(run.text(), first.offset, usize::MAX);
        run.set_text(updated);
    }
    if let Some(run) = para.run_mut(last.run) {
        let updated = cut(run.text(), 0, last.offset + 1);
        run.set_text(updated);
    }
    for ix in (first.run + 1..last.run).rev() {
        para.remove_run(ix)?;
    }
    debug!(
        "removed chars {start}..={end}, detached {} interior runs",
        last.run - first.run - 1
    );

    // The end run now sits right after the start run.
    prune_empty(para, &[first.run + 1, first.run])?;
    Ok(())
}

/// Copies the chars `[start, end]` out as new runs. Each fragment is a clone
/// of the run it came from, trimmed to the copied chars, so formatting
/// travels with it. The paragraph itself is left alone.
pub fn copy_out<P: RunList + ?Sized>(
    para: &P,
    start: usize,
    end: usize,
) -> Result<Vec<P::Run>, SpliceError> {
    let (first, last) = resolve_range(para, start, end)?;

    let mut fragments = Vec::with_capacity(last.run - first.run + 1);
    for (ix, run) in para
        .runs()
        .iter()
        .enumerate()
        .take(last.run + 1)
        .skip(first.run)
    {
        let from = if ix == first.run { first.offset } else { 0 };
        let to = if ix == last.run {
            last.offset + 1
        } else {
            char_len(run.text())
        };
        let text = char_slice(run.text(), from, to);
        if text.is_empty() {
            continue;
        }
        let mut fragment = run.clone();
        fragment.set_text(text.to_string());
        fragments.push(fragment);
    }
    Ok(fragments)
}

/// Places owned runs at char offset `pos`, splitting the receiving run when
/// `pos` falls inside it. Uses the same boundary rule as [`insert`].
pub fn insert_fragments<P: RunList + ?Sized>(
    para: &mut P,
    fragments: Vec<P::Run>,
    pos: usize,
) -> Result<(), SpliceError> {
    let spans = RunSpans::of(para);
    if pos > spans.total() {
        return Err(SpliceError::OffsetOutOfRange {
            offset: pos,
            len: spans.total(),
        });
    }
    if fragments.is_empty() {
        return Ok(());
    }

    let mut at = if spans.run_count() == 0 {
        0
    } else {
        let point = spans
            .insertion_point(pos)
            .ok_or(SpliceError::UnresolvedRun { offset: pos })?;
        let run_len = spans.end_of(point.run) - spans.start_of(point.run);
        if point.offset == 0 && run_len > 0 {
            point.run
        } else if point.offset == run_len {
            point.run + 1
        } else {
            split_run(para, point)?;
            point.run + 1
        }
    };

    for fragment in fragments {
        para.insert_run(at, fragment)?;
        at += 1;
    }
    Ok(())
}

/// Splits a run in two at `point`; both halves keep the run's formatting.
fn split_run<P: RunList + ?Sized>(para: &mut P, point: RunPosition) -> Result<(), SpliceError> {
    let run = para
        .run_mut(point.run)
        .ok_or(SpliceError::UnresolvedRun { offset: point.offset })?;
    let mut tail = run.clone();
    tail.set_text(cut(run.text(), 0, point.offset));
    let head = cut(run.text(), point.offset, usize::MAX);
    run.set_text(head);
    para.insert_run(point.run + 1, tail)?;
    Ok(())
}

/// Validates an inclusive range and resolves both ends.
pub(crate) fn resolve_range<P: RunList + ?Sized>(
    para: &P,
    start: usize,
    end: usize,
) -> Result<(RunPosition, RunPosition), SpliceError> {
    if start > end {
        return Err(SpliceError::InvalidRange { start, end });
    }
    let spans = RunSpans::of(para);
    if end >= spans.total() {
        return Err(SpliceError::OffsetOutOfRange {
            offset: end,
            len: spans.total(),
        });
    }
    let first = spans
        .resolve(start)
        .ok_or(SpliceError::UnresolvedRun { offset: start })?;
    let last = spans
        .resolve(end)
        .ok_or(SpliceError::UnresolvedRun { offset: end })?;
    Ok((first, last))
}

/// Detaches the listed runs if they ended up empty. Indices must be given
/// from highest to lowest.
fn prune_empty<P: RunList + ?Sized>(para: &mut P, indices: &[usize]) -> Result<(), SpliceError> {
    for &ix in indices {
        let empty = para.runs().get(ix).is_some_and(|run| run.text().is_empty());
        if empty {
            para.remove_run(ix)?;
            debug!("detached emptied run {ix}");
        }
    }
    Ok(())
}
