use run_splice::{
    CopyPolicy, Document, DocumentError, Edit, EditScript, Editor, EditorConfig, Marks, Paragraph,
    ParagraphList, Point, Run, RunList, ScriptError, SpliceError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn editor(texts: &[&str]) -> Editor {
    Editor::new(Document::from_paragraphs(
        texts.iter().map(|t| Paragraph::from_text(*t)),
    ))
}

#[test]
fn script_edits_apply_in_order() {
    init_logging();
    let mut editor = editor(&["FOO", "BAR"]);
    let script = EditScript::new(vec![
        Edit::InsertText {
            paragraph: 0,
            offset: 0,
            text: ">".to_string(),
        },
        Edit::RemoveText {
            paragraph: 1,
            start: 0,
            end: 0,
        },
        Edit::CopySegment {
            from: 0,
            to: 1,
            start: 1,
            end: 3,
            at: 2,
        },
    ])
    .source("test");
    editor.apply_script(script).unwrap();

    assert_eq!(editor.paragraph_text(0).as_deref(), Some(">FOO"));
    assert_eq!(editor.paragraph_text(1).as_deref(), Some("ARFOO"));
}

#[test]
fn script_stops_at_the_first_failing_edit() {
    init_logging();
    let mut editor = editor(&["abc"]);
    let script = EditScript::new(vec![
        Edit::RemoveText {
            paragraph: 0,
            start: 0,
            end: 0,
        },
        Edit::RemoveText {
            paragraph: 0,
            start: 0,
            end: 5,
        },
        Edit::InsertText {
            paragraph: 0,
            offset: 0,
            text: "never".to_string(),
        },
    ]);
    let err = editor.apply_script(script).unwrap_err();
    assert_eq!(
        err,
        ScriptError {
            index: 1,
            error: DocumentError::Splice(SpliceError::OffsetOutOfRange { offset: 5, len: 2 }),
        }
    );
    assert_eq!(editor.text(), "bc");
}

#[test]
fn script_round_trips_through_json() {
    let json = serde_json::json!({
        "edits": [
            { "op": "replace_range",
              "start": { "paragraph": 0, "offset": 1 },
              "end": { "paragraph": 1, "offset": 2 },
              "text": "Hello" },
            { "op": "insert_paragraph_after", "paragraph": 0, "text": "tail", "style": "Quote" },
            { "op": "duplicate_paragraph", "paragraph": 1 },
            { "op": "delete_paragraph", "paragraph": 3 }
        ],
        "meta": { "source": "fixture" }
    });
    let script = EditScript::from_json_str(&json.to_string()).unwrap();
    assert_eq!(script.edits.len(), 4);
    assert_eq!(script.meta.source.as_deref(), Some("fixture"));

    let mut editor = editor(&["FOO", "BAR"]);
    editor.apply_script(script).unwrap();

    let doc = editor.doc();
    assert_eq!(doc.paragraph_count(), 3);
    assert_eq!(doc.paragraphs[0].text(), "FHello");
    assert_eq!(doc.paragraphs[1].text(), "tail");
    assert_eq!(doc.paragraphs[1].style.as_deref(), Some("Quote"));
    assert_eq!(doc.paragraphs[2], doc.paragraphs[1]);
}

#[test]
fn copy_edit_defaults_to_the_front() {
    let script: EditScript = serde_json::from_value(serde_json::json!({
        "edits": [{ "op": "copy_segment", "from": 0, "to": 1, "start": 0, "end": 1 }]
    }))
    .unwrap();
    let mut editor = editor(&["ab", "cd"]);
    editor.apply_script(script).unwrap();
    assert_eq!(editor.paragraph_text(1).as_deref(), Some("abcd"));
}

#[test]
fn editor_uses_the_configured_copy_policy() {
    let src = Paragraph::with_runs([Run::new("ab", Marks::bold()), Run::plain("cd")]);
    let dest = Paragraph::from_text("xy");

    let config = EditorConfig::from_json_str(r#"{ "copy_policy": "flatten" }"#).unwrap();
    assert_eq!(config.copy_policy, CopyPolicy::Flatten);
    let mut flat = Editor::with_config(
        Document::from_paragraphs([src.clone(), dest.clone()]),
        config,
    );
    flat.copy_segment(0, 1, 1, 2, 1).unwrap();
    assert_eq!(flat.doc().paragraphs[1].runs, vec![Run::plain("xbcy")]);

    let mut preserving = Editor::new(Document::from_paragraphs([src, dest]));
    assert_eq!(preserving.config().copy_policy, CopyPolicy::PreserveRuns);
    preserving.copy_segment(0, 1, 1, 2, 1).unwrap();
    assert_eq!(
        preserving.doc().paragraphs[1].runs,
        vec![
            Run::plain("x"),
            Run::new("b", Marks::bold()),
            Run::plain("c"),
            Run::plain("y"),
        ]
    );
}

#[test]
fn empty_config_falls_back_to_defaults() {
    let config = EditorConfig::from_json_str("{}").unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn editor_range_helpers_take_points() -> anyhow::Result<()> {
    let mut editor = editor(&["FOO", "BAR"]);
    assert_eq!(
        editor.extract_range(Point::new(0, 1), Point::new(1, 2))?,
        "OOBA"
    );
    editor.replace_range(Point::new(0, 1), Point::new(1, 2), "Hello")?;
    assert_eq!(editor.text(), "FHello");
    editor.move_segment(0, 1, 0, 0)?;
    assert_eq!(editor.paragraph_text(0).as_deref(), Some("Hello"));
    assert_eq!(editor.paragraph_text(1).as_deref(), Some("F"));
    Ok(())
}
