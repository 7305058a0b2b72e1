//! Read-only flattening of a document into plain text.
//!
//! Body paragraphs are concatenated without separators. Table text is
//! gathered cell by cell, each cell followed by a newline and then by the
//! text of any tables nested in it.

use crate::container::{ParagraphList, RunList, TableContainer};
use crate::model::{Cell, Row, Table};

/// Body paragraphs, concatenated.
pub fn outer_text<D: ParagraphList + ?Sized>(doc: &D) -> String {
    doc.paragraphs().iter().map(RunList::text).collect()
}

/// Text of every table in the document, nested tables included.
pub fn inner_text<T: TableContainer + ?Sized>(doc: &T) -> String {
    table_texts(doc)
}

/// [`outer_text`] followed by [`inner_text`].
pub fn combined_text<D: ParagraphList + TableContainer + ?Sized>(doc: &D) -> String {
    let mut text = outer_text(doc);
    text.push_str(&inner_text(doc));
    text
}

pub fn table_texts<T: TableContainer + ?Sized>(node: &T) -> String {
    table_texts_with(node, &Cell::text)
}

pub fn table_texts_with<T, F>(node: &T, f: &F) -> String
where
    T: TableContainer + ?Sized,
    F: Fn(&Cell) -> String,
{
    node.tables()
        .iter()
        .map(|table| row_texts_with(table, f))
        .collect()
}

pub fn row_texts(table: &Table) -> String {
    row_texts_with(table, &Cell::text)
}

pub fn row_texts_with<F: Fn(&Cell) -> String>(table: &Table, f: &F) -> String {
    table.rows.iter().map(|row| cell_texts_with(row, f)).collect()
}

pub fn cell_texts(row: &Row) -> String {
    cell_texts_with(row, &Cell::text)
}

pub fn cell_texts_with<F: Fn(&Cell) -> String>(row: &Row, f: &F) -> String {
    let mut out = String::new();
    for cell in &row.cells {
        out.push_str(&f(cell));
        out.push('\n');
        out.push_str(&table_texts_with(cell, f));
    }
    out
}
