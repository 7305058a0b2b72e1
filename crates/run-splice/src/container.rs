//! Capabilities the splicing engine needs from a document backend.
//!
//! The engine never touches formatting. It only reads and rewrites run text,
//! clones runs, and asks the container to add or detach runs and paragraphs.
//! [`crate::Document`] implements everything here; other backends can be
//! plugged in by implementing the same traits.

use crate::chars::char_len;
use crate::error::ContainerError;
use crate::model::Table;

pub trait RunText {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: String);
}

/// A paragraph: an ordered list of runs whose concatenation is its text.
pub trait RunList {
    type Run: RunText + Clone;

    fn runs(&self) -> &[Self::Run];

    fn run_mut(&mut self, index: usize) -> Option<&mut Self::Run>;

    /// Inserts `run` so that it ends up at `index`. `index == runs().len()`
    /// appends.
    fn insert_run(&mut self, index: usize, run: Self::Run) -> Result<(), ContainerError>;

    /// Detaches the run at `index` and hands it back.
    fn remove_run(&mut self, index: usize) -> Result<Self::Run, ContainerError>;

    /// A fresh run carrying the paragraph's default formatting. Used when
    /// text lands in a paragraph that has no run to inherit formatting from.
    fn default_run(&self, text: String) -> Self::Run;

    fn text(&self) -> String {
        self.runs().iter().map(RunText::text).collect()
    }

    fn char_len(&self) -> usize {
        self.runs().iter().map(|run| char_len(run.text())).sum()
    }
}

/// A document: an ordered list of paragraphs plus the paragraph lifecycle
/// primitives. Indices shift down after a delete.
pub trait ParagraphList {
    type Paragraph: RunList;

    fn paragraphs(&self) -> &[Self::Paragraph];

    fn paragraph_mut(&mut self, index: usize) -> Option<&mut Self::Paragraph>;

    /// Deep-copies the paragraph at `index` and places the copy right after
    /// it. Returns the index of the copy.
    fn duplicate_paragraph(&mut self, index: usize) -> Result<usize, ContainerError>;

    /// Creates a paragraph right after `index`, optionally holding `text` in a
    /// single run and tagged with `style`. Returns the new index.
    fn insert_paragraph_after(
        &mut self,
        index: usize,
        text: Option<&str>,
        style: Option<&str>,
    ) -> Result<usize, ContainerError>;

    /// Detaches the paragraph at `index`.
    fn delete_paragraph(&mut self, index: usize) -> Result<Self::Paragraph, ContainerError>;

    fn paragraph_count(&self) -> usize {
        self.paragraphs().len()
    }
}

/// Anything that can hold tables: the document body or a table cell.
pub trait TableContainer {
    fn tables(&self) -> &[Table];
}
