use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::container::{ParagraphList, RunList};
use crate::error::DocumentError;
use crate::extract::{combined_text, outer_text};
use crate::model::{Document, Paragraph};
use crate::ops::{Edit, EditScript, Point};
use crate::segment::{CopyPolicy, copy_within, extract_range, move_within, replace_range};
use crate::splice::{insert, remove};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub copy_policy: CopyPolicy,
}

impl EditorConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// An edit of a script failed. Edits before `index` stay applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    pub index: usize,
    pub error: DocumentError,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edit #{} failed: {}", self.index, self.error)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Owns a document and applies edits to it with a fixed configuration.
pub struct Editor {
    doc: Document,
    config: EditorConfig,
}

impl Editor {
    pub fn new(doc: Document) -> Self {
        Self::with_config(doc, EditorConfig::default())
    }

    pub fn with_config(doc: Document, config: EditorConfig) -> Self {
        Self { doc, config }
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Body text, paragraphs concatenated.
    pub fn text(&self) -> String {
        outer_text(&self.doc)
    }

    /// Body text followed by table text.
    pub fn full_text(&self) -> String {
        combined_text(&self.doc)
    }

    pub fn paragraph_text(&self, index: usize) -> Option<String> {
        self.doc.paragraph(index).map(RunList::text)
    }

    pub fn insert(
        &mut self,
        paragraph: usize,
        offset: usize,
        text: &str,
    ) -> Result<(), DocumentError> {
        insert(self.paragraph_mut(paragraph)?, text, offset)?;
        Ok(())
    }

    pub fn remove(
        &mut self,
        paragraph: usize,
        start: usize,
        end: usize,
    ) -> Result<(), DocumentError> {
        remove(self.paragraph_mut(paragraph)?, start, end)?;
        Ok(())
    }

    pub fn copy_segment(
        &mut self,
        from: usize,
        to: usize,
        start: usize,
        end: usize,
        at: usize,
    ) -> Result<(), DocumentError> {
        copy_within(&mut self.doc, from, to, start, end, at, self.config.copy_policy)
    }

    pub fn move_segment(
        &mut self,
        from: usize,
        to: usize,
        start: usize,
        end: usize,
    ) -> Result<(), DocumentError> {
        move_within(&mut self.doc, from, to, start, end, self.config.copy_policy)
    }

    pub fn replace_range(
        &mut self,
        start: Point,
        end: Point,
        text: &str,
    ) -> Result<(), DocumentError> {
        replace_range(
            &mut self.doc,
            start.paragraph,
            start.offset,
            end.paragraph,
            end.offset,
            text,
        )
    }

    pub fn extract_range(&self, start: Point, end: Point) -> Result<String, DocumentError> {
        extract_range(
            &self.doc,
            start.paragraph,
            start.offset,
            end.paragraph,
            end.offset,
        )
    }

    pub fn apply(&mut self, edit: Edit) -> Result<(), DocumentError> {
        debug!("applying {edit:?}");
        match edit {
            Edit::InsertText {
                paragraph,
                offset,
                text,
            } => self.insert(paragraph, offset, &text),
            Edit::RemoveText {
                paragraph,
                start,
                end,
            } => self.remove(paragraph, start, end),
            Edit::CopySegment {
                from,
                to,
                start,
                end,
                at,
            } => self.copy_segment(from, to, start, end, at),
            Edit::MoveSegment {
                from,
                to,
                start,
                end,
            } => self.move_segment(from, to, start, end),
            Edit::ReplaceRange { start, end, text } => self.replace_range(start, end, &text),
            Edit::DuplicateParagraph { paragraph } => {
                self.doc.duplicate_paragraph(paragraph)?;
                Ok(())
            }
            Edit::InsertParagraphAfter {
                paragraph,
                text,
                style,
            } => {
                self.doc
                    .insert_paragraph_after(paragraph, text.as_deref(), style.as_deref())?;
                Ok(())
            }
            Edit::DeleteParagraph { paragraph } => {
                self.doc.delete_paragraph(paragraph)?;
                Ok(())
            }
        }
    }

    /// Applies every edit in order and stops at the first failure.
    pub fn apply_script(&mut self, script: EditScript) -> Result<(), ScriptError> {
        if let Some(source) = &script.meta.source {
            debug!("applying {} edits from {source}", script.edits.len());
        }
        for (index, edit) in script.edits.into_iter().enumerate() {
            self.apply(edit)
                .map_err(|error| ScriptError { index, error })?;
        }
        Ok(())
    }

    fn paragraph_mut(&mut self, index: usize) -> Result<&mut Paragraph, DocumentError> {
        let count = self.doc.paragraph_count();
        self.doc
            .paragraph_mut(index)
            .ok_or(DocumentError::ParagraphOutOfRange { index, count })
    }
}
