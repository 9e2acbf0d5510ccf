use indoc::indoc;

use crate::{
    parse_listing, render_listing,
    text::{columns, connector, entry_line, root_line},
    Column, Connector, EntryKind, TreeLine,
};

fn parse_all(text: &str) -> Vec<TreeLine> {
    parse_listing(text)
        .map(|parsed| parsed.map(|source| source.tree_line))
        .collect::<Result<_, _>>()
        .map_err(|e| format!("{e}"))
        .unwrap()
}

#[test]
fn test_connectors() {
    assert_eq!(connector("├─ x"), Ok(("x", Connector::Middle)));
    assert_eq!(connector("└─ x"), Ok(("x", Connector::Last)));
    assert_eq!(connector("├── x"), Ok(("x", Connector::Middle)));
    assert_eq!(connector("└── x"), Ok(("x", Connector::Last)));
    assert!(connector("├─x").is_err());
    assert!(connector("-- x").is_err());
}

#[test]
fn test_columns() {
    assert_eq!(columns(""), vec![]);
    assert_eq!(columns("│  "), vec![Column::Continuation]);
    assert_eq!(columns("   "), vec![Column::Blank]);
    assert_eq!(
        columns("│     │  "),
        vec![Column::Continuation, Column::Blank, Column::Continuation]
    );
    // Partial columns are dropped
    assert_eq!(columns("│    "), vec![Column::Continuation]);
    assert_eq!(columns("  "), vec![]);
}

#[test]
fn test_entry_line_depths() {
    let (_, line) = entry_line("├─ src/").unwrap();
    assert_eq!(line.depth(), 0);
    assert!(line.is_directory());
    assert_eq!(line.name(), "src");

    let (_, line) = entry_line("│  └─ main.rs").unwrap();
    assert_eq!(line.depth(), 1);
    assert_eq!(line.kind(), EntryKind::File);
    assert_eq!(line.connector(), Some(Connector::Last));

    let (_, line) = entry_line("   │     ├─ deep/").unwrap();
    assert_eq!(line.depth(), 3);
    assert_eq!(
        line.prefix(),
        &[Column::Blank, Column::Continuation, Column::Blank]
    );
}

#[test]
fn test_depth_ignores_prefix_glyphs() {
    let (_, with_bars) = entry_line("│  │  └─ name").unwrap();
    let (_, with_spaces) = entry_line("      └─ name").unwrap();
    assert_eq!(with_bars.depth(), with_spaces.depth());
}

#[test]
fn test_depth_rounds_down_inconsistent_widths() {
    // Four-wide indentation, as written by some other tools
    let (_, line) = entry_line("│   └── name").unwrap();
    assert_eq!(line.depth(), 1);
    let (_, line) = entry_line("  ├─ name").unwrap();
    assert_eq!(line.depth(), 0);
    let (_, line) = entry_line("     ├─ name").unwrap();
    assert_eq!(line.depth(), 1);
}

#[test]
fn test_entry_names() {
    let (_, line) = entry_line("├─ with spaces.txt").unwrap();
    assert_eq!(line.name(), "with spaces.txt");
    // The connector takes exactly one space, the rest belongs to the name
    let (_, line) = entry_line("├─  padded/").unwrap();
    assert_eq!(line.name(), " padded");
    assert!(line.is_directory());
    let (_, line) = entry_line("└─ trail ").unwrap();
    assert_eq!(line.name(), "trail ");
    assert_eq!(line.kind(), EntryKind::File);
    // Spaces after a directory's slash are not part of anything
    let (_, line) = entry_line("└─ dir/  ").unwrap();
    assert_eq!(line.name(), "dir");
    assert!(line.is_directory());
    let (_, line) = entry_line("└─ .hidden").unwrap();
    assert_eq!(line.name(), ".hidden");

    assert!(entry_line("├─ a/b").is_err());
    assert!(entry_line("├─ a//").is_err());
    assert!(entry_line("├─ ./").is_err());
    assert!(entry_line("├─ ..").is_err());
    assert!(entry_line("├─ /").is_err());
    assert!(entry_line("├─    /").is_err());
    assert!(entry_line("├─ ").is_err());
    assert!(entry_line("├─ a/ b").is_err());
}

#[test]
fn test_root_line() {
    let (_, line) = root_line("proj/").unwrap();
    assert!(line.is_root());
    assert_eq!(line.name(), "proj");
    // Root is always a directory
    let (_, line) = root_line("proj").unwrap();
    assert!(line.is_directory());

    let (_, line) = root_line("proj/ ").unwrap();
    assert_eq!(line.name(), "proj");

    assert!(root_line(" proj/").is_err());
    assert!(root_line("│  proj/").is_err());
    assert!(root_line("├─ proj/").is_err());
    assert!(root_line("a/b/").is_err());
}

#[test]
fn test_parse_listing() {
    let lines = parse_all(indoc!(
        "
        proj/
        ├─ src/
        │  └─ main.ext
        └─ README.md
        "
    ));
    assert_eq!(
        lines,
        vec![
            TreeLine::root("proj"),
            TreeLine::entry(vec![], Connector::Middle, "src", EntryKind::Directory),
            TreeLine::entry(
                vec![Column::Continuation],
                Connector::Last,
                "main.ext",
                EntryKind::File
            ),
            TreeLine::entry(vec![], Connector::Last, "README.md", EntryKind::File),
        ]
    );
}

#[test]
fn test_blank_lines_and_line_numbers() {
    let text = "\n\nproj/\n\n├─ a\r\n   \n└─ b   \n";
    let parsed: Vec<_> = parse_listing(text).map(Result::unwrap).collect();
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0].line_number, 3);
    assert!(parsed[0].tree_line.is_root());
    assert_eq!(parsed[1].line_number, 5);
    assert_eq!(parsed[1].text, "├─ a");
    assert_eq!(parsed[2].line_number, 7);
    assert_eq!(parsed[2].tree_line.name(), "b");
}

#[test]
fn test_listing_without_root_line() {
    let lines = parse_all("├─ a/\n└─ b");
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| !line.is_root()));
}

#[test]
fn test_only_first_line_can_be_root() {
    let mut listing = parse_listing("proj/\nother/\n└─ file");
    assert!(listing.next().unwrap().unwrap().tree_line.is_root());
    let err = listing.next().unwrap().unwrap_err();
    assert_eq!(err.line_number(), 2);
    assert_eq!(err.line(), "other/");
    let last = listing.next().unwrap().unwrap();
    assert_eq!(last.tree_line.name(), "file");
    assert!(listing.next().is_none());
}

#[test]
fn test_malformed_line_is_reported_and_skipped() {
    let text = indoc!(
        "
        proj/
        ├─ a/
        │  ?? broken
        │  └─ b
        └─ c
        "
    );
    let results: Vec<_> = parse_listing(text).collect();
    assert_eq!(results.len(), 5);
    let err = results[2].as_ref().unwrap_err();
    assert_eq!(err.line_number(), 3);
    assert_eq!(
        err.message(),
        "Expected a connector (├─ or └─) after the prefix"
    );
    assert_eq!(
        format!("{err}"),
        concat!(
            "Error: Expected a connector (├─ or └─) after the prefix\n",
            "     |\n",
            "   3 | │  ?? broken\n",
            "     |    ^\n",
        )
    );
    assert_eq!(results[3].as_ref().unwrap().tree_line.name(), "b");
    assert_eq!(results[4].as_ref().unwrap().tree_line.name(), "c");
}

#[test]
fn test_trailing_text_error() {
    let err = parse_listing("root/\n├─ a/b").nth(1).unwrap().unwrap_err();
    assert_eq!(err.message(), "Unexpected text after the entry name");
    let owned = err.to_owned_error();
    assert_eq!(owned.line_number(), 2);
    assert_eq!(owned.to_string(), err.to_string());
}

#[test]
fn test_render_then_parse() {
    let text = "proj/\n├─ a/\n│  ├─ b/\n│  │  └─ c\n│  └─ d\n└─ e/\n   └─ f";
    let lines = parse_all(text);
    assert_eq!(crate::render_listing(&lines), text);
}

#[test]
fn test_names_round_trip() {
    let rendered = render_listing(&[
        TreeLine::root("proj"),
        TreeLine::entry(vec![], Connector::Middle, " lead", EntryKind::Directory),
        TreeLine::entry(vec![Column::Continuation], Connector::Last, " both ", EntryKind::File),
        TreeLine::entry(vec![], Connector::Last, "trail ", EntryKind::File),
    ]);
    assert_eq!(rendered, "proj/\n├─  lead/\n│  └─  both \n└─ trail ");
    let names: Vec<_> = parse_all(&rendered)
        .iter()
        .map(|line| line.name().to_owned())
        .collect();
    assert_eq!(names, vec!["proj", " lead", " both ", "trail "]);
}

#[test]
fn test_whitespace_lines_skipped() {
    let lines = parse_all("proj/\n   \n\t\n└─ a\r\n");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].name(), "a");
}
