//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; each is parsed, checked against the
//! structural invariants and snapshotted as a one-line-per-block outline.


use pretty_assertions::assert_eq;

use crate::{
    images::{ImageSource, ImageUpdate},
    parsing::{Document, blocks::Block, content_lines, parse_document},
};

use outline::outline;

fn parse_fixture(name: &str) -> Document {
    let path = format!(
        "{}/src/parsing/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(path).unwrap();
    let doc = parse_document(&md);
    invariants::check(&doc.blocks);
    doc
}

// Fixture tests

#[test]
fn fixture_readme() {
    insta::assert_snapshot!(outline(&parse_fixture("readme")), @r##"
    Heading(1): Project Title
    Paragraph: Some bold and italic text with a link.
    Heading(2): Install
    ListItem(Bullet): download the archive
    ListItem(Bullet): unpack it
    ListItem(Task(true)): read the notes
    ListItem(Task(false)): star the repo
    BlankRow
    Paragraph: Then run the installer.
    CodeBlock(fenced=true, lang=sh): ["    ./install.sh --prefix ~/.local", "      --verbose"]
    BlockQuote(continues=false): Note: this is experimental.
    BlockQuote(continues=true): Expect breaking changes.
    Rule
    Paragraph: Contact me at dev@example.com
    "##);
}

#[test]
fn fixture_tables_and_math() {
    insta::assert_snapshot!(outline(&parse_fixture("tables_and_math")), @r##"
    Heading(3): Results
    Table: ["Name", "Score", "Rank"] [Start, Center, End] [["Ada", "99", "1"], ["Bob", "87"]]
    MathBlock: E = mc^2
    MathInline: "The area is " "\\pi r^2" " for a circle."
    Image: diagram -> https://example.com/diagram.svg
    ListItem(Ordered(1)): first
    ListItem(Ordered(2)): second
    ListItem(Ordered(10)): tenth
    "##);
}

#[test]
fn fixture_crlf_unterminated() {
    insta::assert_snapshot!(outline(&parse_fixture("crlf_unterminated")), @r##"
    Paragraph: Windows line
    CodeBlock(fenced=true, lang=-): ["unterminated", "  still code"]
    "##);
}

// Document-level behavior

#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_document("\n  \r\n\t\n").is_empty());
}

#[test]
fn line_splitting_accepts_every_newline_style() {
    assert_eq!(content_lines("a\r\nb\rc\n\nd"), vec!["a", "b", "c", "d"]);
}

#[test]
fn list_runs_group_adjacent_items() {
    let doc = parse_document("- a\n- b\ntext\n1. c\n# h\n- d");
    assert_eq!(doc.list_runs(), vec![0..2, 4..5, 6..7]);
}

#[test]
fn link_targets_include_table_cells() {
    let doc = parse_document(
        "See [docs](https://docs.rs) or mail ops@example.org\n|Site|\n|---|\n|[home](https://example.com)|",
    );
    let targets: Vec<_> = doc
        .link_targets()
        .into_iter()
        .map(|t| (t.block_index, t.text, t.target, t.is_email))
        .collect();
    assert_eq!(
        targets,
        vec![
            (0, "docs".to_string(), "https://docs.rs".to_string(), false),
            (
                0,
                "ops@example.org".to_string(),
                "ops@example.org".to_string(),
                true
            ),
            (1, "home".to_string(), "https://example.com".to_string(), false),
        ]
    );
}

#[test]
fn image_updates_land_on_image_nodes_only() {
    let mut doc = parse_document("![a](a.png)\ntext");
    assert_eq!(doc.image_references(), vec![(0, "a.png")]);

    let source = ImageSource::File("a.png".into());
    assert!(doc.apply_image(ImageUpdate {
        block_index: 0,
        source: source.clone(),
    }));
    assert!(!doc.apply_image(ImageUpdate {
        block_index: 1,
        source: source.clone(),
    }));

    let Block::Image { resolved, .. } = &doc.blocks[0] else {
        panic!("expected image");
    };
    assert_eq!(resolved.as_ref(), Some(&source));
}

/// Code fences are raw zones: nothing inside is classified or tokenized.
#[test]
fn raw_zone_suppresses_parsing() {
    let doc = parse_document("```\n| a | b |\n**bold** $x$\n```");
    assert_eq!(doc.len(), 1);
    let Block::CodeBlock { lines, .. } = &doc.blocks[0] else {
        panic!("expected code block");
    };
    assert_eq!(lines, &vec!["| a | b |".to_string(), "**bold** $x$".to_string()]);
}
