use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::chars::char_slice;
use crate::container::{ParagraphList, RunList};
use crate::error::{DocumentError, SpliceError};
use crate::splice::{copy_out, insert, insert_fragments, remove, resolve_range};

/// How copied text lands in its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyPolicy {
    /// Copied chars arrive as new runs cloned from their source runs.
    #[default]
    PreserveRuns,
    /// Copied chars arrive as plain text and take the destination's formatting.
    Flatten,
}

/// A copied range, detached from its source paragraph.
enum Payload<R> {
    Text(String),
    Runs(Vec<R>),
}

fn take_payload<P: RunList + ?Sized>(
    para: &P,
    start: usize,
    end: usize,
    policy: CopyPolicy,
) -> Result<Payload<P::Run>, SpliceError> {
    match policy {
        CopyPolicy::PreserveRuns => copy_out(para, start, end).map(Payload::Runs),
        CopyPolicy::Flatten => {
            resolve_range(para, start, end)?;
            let text = para.text();
            Ok(Payload::Text(char_slice(&text, start, end + 1).to_string()))
        }
    }
}

fn put_payload<P: RunList + ?Sized>(
    para: &mut P,
    payload: Payload<P::Run>,
    pos: usize,
) -> Result<(), SpliceError> {
    match payload {
        Payload::Text(text) => insert(para, &text, pos),
        Payload::Runs(runs) => insert_fragments(para, runs, pos),
    }
}

/// Copies chars `[start, end]` of `src` into `dest` at `insert_pos`.
///
/// Nothing is written when the source range does not resolve.
pub fn copy_segment<S, D>(
    src: &S,
    dest: &mut D,
    start: usize,
    end: usize,
    insert_pos: usize,
    policy: CopyPolicy,
) -> Result<(), SpliceError>
where
    S: RunList + ?Sized,
    D: RunList<Run = S::Run> + ?Sized,
{
    let payload = take_payload(src, start, end, policy)?;
    put_payload(dest, payload, insert_pos)
}

/// Moves chars `[start, end]` of `src` to the front of `dest`.
pub fn move_segment<S, D>(
    src: &mut S,
    dest: &mut D,
    start: usize,
    end: usize,
    policy: CopyPolicy,
) -> Result<(), SpliceError>
where
    S: RunList + ?Sized,
    D: RunList<Run = S::Run> + ?Sized,
{
    copy_segment(src, dest, start, end, 0, policy)?;
    remove(src, start, end)
}

/// Copies chars `[start, end]` of paragraph `src` into paragraph `dest` of
/// the same document. `src` and `dest` may be the same paragraph.
pub fn copy_within<D: ParagraphList + ?Sized>(
    doc: &mut D,
    src: usize,
    dest: usize,
    start: usize,
    end: usize,
    insert_pos: usize,
    policy: CopyPolicy,
) -> Result<(), DocumentError> {
    check_paragraph(doc, src)?;
    check_paragraph(doc, dest)?;
    let payload = take_payload(&doc.paragraphs()[src], start, end, policy)?;
    put_payload(paragraph_mut(doc, dest)?, payload, insert_pos)?;
    Ok(())
}

/// Moves chars `[start, end]` of paragraph `src` to the front of paragraph
/// `dest`. When both are the same paragraph the range is cut first and then
/// reinserted at offset 0.
pub fn move_within<D: ParagraphList + ?Sized>(
    doc: &mut D,
    src: usize,
    dest: usize,
    start: usize,
    end: usize,
    policy: CopyPolicy,
) -> Result<(), DocumentError> {
    check_paragraph(doc, src)?;
    check_paragraph(doc, dest)?;
    let payload = take_payload(&doc.paragraphs()[src], start, end, policy)?;
    if src == dest {
        let para = paragraph_mut(doc, src)?;
        remove(para, start, end)?;
        put_payload(para, payload, 0)?;
    } else {
        put_payload(paragraph_mut(doc, dest)?, payload, 0)?;
        remove(paragraph_mut(doc, src)?, start, end)?;
    }
    Ok(())
}

/// Replaces everything from (`start_para`, `start_offset`) through
/// (`end_para`, `end_offset`) inclusive with `text`.
///
/// Paragraphs strictly between the two are deleted. The start paragraph
/// keeps its prefix and receives `text`; the end paragraph keeps whatever
/// followed `end_offset` and stays a paragraph of its own. Removal ends are
/// clamped to the last char of their paragraph.
pub fn replace_range<D: ParagraphList + ?Sized>(
    doc: &mut D,
    start_para: usize,
    start_offset: usize,
    end_para: usize,
    end_offset: usize,
    text: &str,
) -> Result<(), DocumentError> {
    check_paragraph(doc, start_para)?;
    check_paragraph(doc, end_para)?;
    if start_para > end_para {
        return Err(DocumentError::InvalidParagraphRange {
            start: start_para,
            end: end_para,
        });
    }
    let start_len = doc.paragraphs()[start_para].char_len();
    if start_offset > start_len {
        return Err(SpliceError::OffsetOutOfRange {
            offset: start_offset,
            len: start_len,
        }
        .into());
    }
    if start_para == end_para && end_offset < start_offset {
        return Err(SpliceError::InvalidRange {
            start: start_offset,
            end: end_offset,
        }
        .into());
    }

    if start_para == end_para {
        remove_clamped(paragraph_mut(doc, start_para)?, start_offset, end_offset);
    } else {
        remove_clamped(paragraph_mut(doc, start_para)?, start_offset, usize::MAX);

        for _ in start_para + 1..end_para {
            doc.delete_paragraph(start_para + 1)?;
        }
        debug!(
            "deleted {} paragraphs after paragraph {start_para}",
            end_para - start_para - 1
        );

        remove_clamped(paragraph_mut(doc, start_para + 1)?, 0, end_offset);
    }

    insert(paragraph_mut(doc, start_para)?, text, start_offset)?;
    Ok(())
}

/// Text from (`start_para`, `start_offset`) up to but excluding
/// (`end_para`, `end_offset`). Offsets past the end of a paragraph are
/// clamped; a reversed range yields "".
pub fn extract_range<D: ParagraphList + ?Sized>(
    doc: &D,
    start_para: usize,
    start_offset: usize,
    end_para: usize,
    end_offset: usize,
) -> Result<String, DocumentError> {
    check_paragraph(doc, start_para)?;
    check_paragraph(doc, end_para)?;

    let paragraphs = doc.paragraphs();
    if start_para == end_para {
        let text = paragraphs[start_para].text();
        return Ok(char_slice(&text, start_offset, end_offset).to_string());
    }

    let mut out = String::new();
    for (ix, para) in paragraphs
        .iter()
        .enumerate()
        .take(end_para + 1)
        .skip(start_para)
    {
        let text = para.text();
        if ix == start_para {
            out.push_str(char_slice(&text, start_offset, usize::MAX));
        } else if ix == end_para {
            out.push_str(char_slice(&text, 0, end_offset));
        } else {
            out.push_str(&text);
        }
    }
    Ok(out)
}

fn remove_clamped<P: RunList + ?Sized>(para: &mut P, start: usize, end: usize) {
    let len = para.char_len();
    if start >= len {
        return;
    }
    let end = end.min(len - 1);
    if let Err(err) = remove(para, start, end) {
        warn!("skipped removal of {start}..={end}: {err}");
    }
}

fn check_paragraph<D: ParagraphList + ?Sized>(doc: &D, index: usize) -> Result<(), DocumentError> {
    let count = doc.paragraph_count();
    if index >= count {
        return Err(DocumentError::ParagraphOutOfRange { index, count });
    }
    Ok(())
}

fn paragraph_mut<D: ParagraphList + ?Sized>(
    doc: &mut D,
    index: usize,
) -> Result<&mut D::Paragraph, DocumentError> {
    let count = doc.paragraph_count();
    doc.paragraph_mut(index)
        .ok_or(DocumentError::ParagraphOutOfRange { index, count })
}
