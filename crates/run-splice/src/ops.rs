use serde::{Deserialize, Serialize};

/// A position in a document: paragraph index plus char offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub paragraph: usize,
    pub offset: usize,
}

impl Point {
    pub fn new(paragraph: usize, offset: usize) -> Self {
        Self { paragraph, offset }
    }
}

/// One edit. Offsets are read against the document as it stands when the
/// edit is applied, after every earlier edit of the same script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    InsertText {
        paragraph: usize,
        offset: usize,
        text: String,
    },
    RemoveText {
        paragraph: usize,
        start: usize,
        end: usize,
    },
    CopySegment {
        from: usize,
        to: usize,
        start: usize,
        end: usize,
        #[serde(default)]
        at: usize,
    },
    MoveSegment {
        from: usize,
        to: usize,
        start: usize,
        end: usize,
    },
    ReplaceRange {
        start: Point,
        end: Point,
        text: String,
    },
    DuplicateParagraph {
        paragraph: usize,
    },
    InsertParagraphAfter {
        paragraph: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    DeleteParagraph {
        paragraph: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Edits applied in order, each one seeing the result of the previous.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditScript {
    #[serde(default)]
    pub edits: Vec<Edit>,
    #[serde(default)]
    pub meta: ScriptMeta,
}

impl EditScript {
    pub fn new(edits: Vec<Edit>) -> Self {
        Self {
            edits,
            meta: ScriptMeta::default(),
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.meta.source = Some(source.into());
        self
    }

    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
