use run_splice::{
    Document, DocumentError, Marks, Paragraph, ParagraphList, Run, RunList, SpliceError,
    outer_text, replace_range,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn doc(texts: &[&str]) -> Document {
    Document::from_paragraphs(texts.iter().map(|t| Paragraph::from_text(*t)))
}

#[test]
fn replace_in_an_empty_paragraph_inserts() {
    let mut d = doc(&[""]);
    replace_range(&mut d, 0, 0, 0, 0, "FOO").unwrap();
    assert_eq!(outer_text(&d), "FOO");

    let mut d = doc(&[""]);
    replace_range(&mut d, 0, 0, 0, 0, "BAR").unwrap();
    assert_eq!(outer_text(&d), "BAR");
}

#[test]
fn replace_whole_paragraph_text() {
    let mut d = doc(&["FOO"]);
    replace_range(&mut d, 0, 0, 0, 2, "BAR").unwrap();
    assert_eq!(outer_text(&d), "BAR");
}

#[test]
fn replace_across_two_paragraphs() {
    let mut d = doc(&["FOO", "BAR"]);
    replace_range(&mut d, 0, 1, 1, 2, "Hello").unwrap();
    assert_eq!(outer_text(&d), "FHello");
    assert_eq!(d.paragraph_count(), 2);
    assert_eq!(d.paragraphs[0].text(), "FHello");
    assert_eq!(d.paragraphs[1].text(), "");
}

#[test]
fn replace_deletes_paragraphs_in_between() {
    init_logging();
    let mut d = doc(&["one", "two", "three", "four", "five"]);
    replace_range(&mut d, 0, 1, 3, 1, "X").unwrap();
    assert_eq!(d.paragraph_count(), 3);
    assert_eq!(d.paragraphs[0].text(), "oX");
    assert_eq!(d.paragraphs[1].text(), "ur");
    assert_eq!(d.paragraphs[2].text(), "five");
}

#[test]
fn replace_keeps_formatting_outside_the_range() {
    let mut d = Document::from_paragraphs([
        Paragraph::with_runs([Run::new("abc", Marks::bold()), Run::plain("def")]),
        Paragraph::with_runs([Run::plain("gh"), Run::new("ijk", Marks::italic())]),
    ]);
    replace_range(&mut d, 0, 2, 1, 2, "-").unwrap();
    assert_eq!(
        d.paragraphs[0].runs,
        vec![Run::new("ab-", Marks::bold())]
    );
    assert_eq!(d.paragraphs[1].runs, vec![Run::new("jk", Marks::italic())]);
}

#[test]
fn replace_end_offset_past_the_paragraph_is_clamped() {
    init_logging();
    let mut d = doc(&["abc", "defgh"]);
    replace_range(&mut d, 0, 3, 1, 99, "!").unwrap();
    assert_eq!(d.paragraphs[0].text(), "abc!");
    assert_eq!(d.paragraphs[1].text(), "");
}

#[test]
fn chained_replacements_see_previous_edits() {
    let mut d = doc(&["alpha", "beta", "gamma"]);
    replace_range(&mut d, 0, 0, 0, 4, "A").unwrap();
    replace_range(&mut d, 0, 1, 1, 3, "-B").unwrap();
    assert_eq!(outer_text(&d), "A-Bgamma");
    assert_eq!(d.paragraph_count(), 3);
}

#[test]
fn invalid_paragraph_indices_fail_before_any_change() {
    let mut d = doc(&["FOO", "BAR"]);
    let before = d.clone();

    assert_eq!(
        replace_range(&mut d, 0, 0, 5, 0, "x"),
        Err(DocumentError::ParagraphOutOfRange { index: 5, count: 2 })
    );
    assert_eq!(
        replace_range(&mut d, 1, 0, 0, 0, "x"),
        Err(DocumentError::InvalidParagraphRange { start: 1, end: 0 })
    );
    assert_eq!(
        replace_range(&mut d, 0, 4, 1, 0, "x"),
        Err(DocumentError::Splice(SpliceError::OffsetOutOfRange {
            offset: 4,
            len: 3
        }))
    );
    assert_eq!(d, before);
}

#[test]
fn reversed_range_in_one_paragraph_fails_without_inserting() {
    let mut d = doc(&["abcdef"]);
    let before = d.clone();
    assert_eq!(
        replace_range(&mut d, 0, 4, 0, 1, "X"),
        Err(DocumentError::Splice(SpliceError::InvalidRange { start: 4, end: 1 }))
    );
    assert_eq!(d, before);
    assert_eq!(outer_text(&d), "abcdef");
}
