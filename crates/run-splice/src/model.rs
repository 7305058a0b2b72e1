use log::debug;
use serde::{Deserialize, Serialize};

use crate::container::{ParagraphList, RunList, RunText, TableContainer};
use crate::error::ContainerError;

/// Character formatting of a run. Opaque to the splicing engine: runs are
/// cloned with their marks but marks are never compared or merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Marks {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_half_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
}

impl Marks {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    pub fn underline() -> Self {
        Self {
            underline: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub marks: Marks,
}

impl Run {
    pub fn new(text: impl Into<String>, marks: Marks) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Marks::default())
    }
}

impl RunText for Run {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Paragraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph holding `text` in one plain run, or no run at all for "".
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut paragraph = Self::new();
        paragraph.set_text(text);
        paragraph
    }

    pub fn with_runs(runs: impl IntoIterator<Item = Run>) -> Self {
        Self {
            style: None,
            runs: runs.into_iter().collect(),
        }
    }

    pub fn styled(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn add_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Replaces every run with a single plain run holding `text`.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.runs.clear();
        if !text.is_empty() {
            self.runs.push(Run::plain(text));
        }
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

impl RunList for Paragraph {
    type Run = Run;

    fn runs(&self) -> &[Run] {
        &self.runs
    }

    fn run_mut(&mut self, index: usize) -> Option<&mut Run> {
        self.runs.get_mut(index)
    }

    fn insert_run(&mut self, index: usize, run: Run) -> Result<(), ContainerError> {
        if index > self.runs.len() {
            return Err(ContainerError::RunOutOfRange {
                index,
                count: self.runs.len(),
            });
        }
        self.runs.insert(index, run);
        Ok(())
    }

    fn remove_run(&mut self, index: usize) -> Result<Run, ContainerError> {
        if index >= self.runs.len() {
            return Err(ContainerError::RunOutOfRange {
                index,
                count: self.runs.len(),
            });
        }
        Ok(self.runs.remove(index))
    }

    fn default_run(&self, text: String) -> Run {
        Run::plain(text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Cell {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::from_text(text)],
            tables: Vec::new(),
        }
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Paragraph texts joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(RunList::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TableContainer for Cell {
    fn tables(&self) -> &[Table] {
        &self.tables
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// A `rows` x `cols` grid filled row-major from `texts`; missing texts
    /// leave empty cells.
    pub fn grid<S: AsRef<str>>(rows: usize, cols: usize, texts: &[S]) -> Self {
        let mut texts = texts.iter();
        Self::new((0..rows).map(|_| {
            Row::new((0..cols).map(|_| {
                Cell::new(texts.next().map(|t| t.as_ref()).unwrap_or_default())
            }))
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paragraphs(paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().collect(),
            tables: Vec::new(),
        }
    }

    /// Appends a paragraph holding `text` and returns its index.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> usize {
        self.paragraphs.push(Paragraph::from_text(text));
        self.paragraphs.len() - 1
    }

    pub fn add_table(&mut self, table: Table) -> &mut Table {
        self.tables.push(table);
        let last = self.tables.len() - 1;
        &mut self.tables[last]
    }

    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    fn check_index(&self, index: usize) -> Result<(), ContainerError> {
        if index >= self.paragraphs.len() {
            return Err(ContainerError::ParagraphOutOfRange {
                index,
                count: self.paragraphs.len(),
            });
        }
        Ok(())
    }
}

impl ParagraphList for Document {
    type Paragraph = Paragraph;

    fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    fn paragraph_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    fn duplicate_paragraph(&mut self, index: usize) -> Result<usize, ContainerError> {
        self.check_index(index)?;
        let copy = self.paragraphs[index].clone();
        self.paragraphs.insert(index + 1, copy);
        debug!("duplicated paragraph {index}");
        Ok(index + 1)
    }

    fn insert_paragraph_after(
        &mut self,
        index: usize,
        text: Option<&str>,
        style: Option<&str>,
    ) -> Result<usize, ContainerError> {
        self.check_index(index)?;
        let mut paragraph = Paragraph::from_text(text.unwrap_or_default());
        paragraph.style = style.map(str::to_string);
        self.paragraphs.insert(index + 1, paragraph);
        debug!("inserted paragraph after {index}");
        Ok(index + 1)
    }

    fn delete_paragraph(&mut self, index: usize) -> Result<Paragraph, ContainerError> {
        self.check_index(index)?;
        debug!("deleting paragraph {index}");
        Ok(self.paragraphs.remove(index))
    }
}

impl TableContainer for Document {
    fn tables(&self) -> &[Table] {
        &self.tables
    }
}
