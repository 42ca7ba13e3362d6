//! Static HTML export of the explorer
//!
//! Produces the same markup the browser view builds: a `tag-filter`
//! container of buttons and a `test-list` container of file sections.
//! Output is a snapshot for one selection; buttons carry no behavior.

use std::fmt::Write as _;

use crate::config::ViewConfig;
use crate::render::{Explorer, FileSection, TagButton, TestCard};
use crate::selection::TagSelection;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
.tag-button { margin: 0 0.25rem 0.25rem 0; border: 1px solid #ccc; border-radius: 4px; background: #fff; padding: 0.25rem 0.5rem; }
.tag-button.active { background: #2563eb; color: #fff; }
.file-item { margin-top: 1.5rem; }
.test-item { border: 1px solid #e5e7eb; border-radius: 6px; padding: 0.75rem; margin: 0.5rem 0; }
.tags span { margin-right: 0.5rem; color: #4b5563; }
";

/// Escapes text for element content and double-quoted attributes
#[must_use]
pub fn escape(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
        out
    })
}

/// Filter-bar buttons, one per line
#[must_use]
pub fn render_buttons(buttons: &[TagButton]) -> String {
    buttons.iter().fold(String::new(), |mut out, button| {
        let class = if button.active {
            "tag-button active"
        } else {
            "tag-button"
        };
        let _ = writeln!(
            out,
            r#"<button class="{class}" data-key="{}">{}</button>"#,
            escape(&button.tag.key),
            escape(&button.label())
        );
        out
    })
}

fn render_card(out: &mut String, card: &TestCard) {
    let _ = writeln!(out, r#"<div class="test-item">"#);
    let _ = writeln!(out, "<h3>{}</h3>", escape(&card.method));
    let tags: String = card
        .tags
        .iter()
        .map(|tag| {
            format!(
                r#"<span data-key="{}">{}</span>"#,
                escape(&tag.key),
                escape(&tag.label())
            )
        })
        .collect();
    let _ = writeln!(out, r#"<div class="tags">{tags}</div>"#);
    let _ = writeln!(out, r#"<div class="test-details">"#);
    for (label, value) in card.fields() {
        let _ = writeln!(out, "<p><strong>{label}:</strong> {}</p>", escape(value));
    }
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</div>");
}

/// Test-list content: one `file-item` per section
#[must_use]
pub fn render_fragment(sections: &[FileSection]) -> String {
    sections.iter().fold(String::new(), |mut out, section| {
        let _ = writeln!(out, r#"<div class="file-item">"#);
        let _ = writeln!(out, "<h2>{}</h2>", escape(&section.filename));
        let _ = writeln!(out, r#"<div class="test-list">"#);
        section.cards.iter().for_each(|card| render_card(&mut out, card));
        let _ = writeln!(out, "</div>");
        let _ = writeln!(out, "</div>");
        out
    })
}

/// A complete standalone page for the selection
#[must_use]
pub fn render_page(explorer: &Explorer, selection: &TagSelection, view: &ViewConfig) -> String {
    let buttons = render_buttons(&explorer.buttons(selection));
    let list = render_fragment(&explorer.sections(selection));

    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, r#"<html lang="en">"#);
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, r#"<meta charset="utf-8">"#);
    let _ = writeln!(out, "<title>{}</title>", escape(&view.title));
    let _ = writeln!(out, "<style>\n{STYLE}</style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{}</h1>", escape(&view.title));
    let _ = writeln!(
        out,
        "<div id=\"{}\">\n{buttons}</div>",
        escape(&view.filter_element_id)
    );
    let _ = writeln!(
        out,
        "<div id=\"{}\">\n{list}</div>",
        escape(&view.list_element_id)
    );
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileRecord, Tag, TestBlock, TestRecord};
    use crate::tags::TagOrder;

    fn explorer() -> Explorer {
        Explorer::new(
            vec![
                FileRecord::new("a.json")
                    .with_test(
                        TestRecord::new("test1").with_block(
                            TestBlock::default()
                                .with_tag(Tag::new("team", "core"))
                                .with_given("a <user>"),
                        ),
                    )
                    .with_test(
                        TestRecord::new("test2")
                            .with_block(TestBlock::default().with_tag(Tag::new("team", "infra"))),
                    ),
            ],
            TagOrder::default(),
        )
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_page_contains_containers_and_buttons() {
        let html = render_page(&explorer(), &TagSelection::new(), &ViewConfig::default());
        assert!(html.contains(r#"<div id="tag-filter">"#));
        assert!(html.contains(r#"<div id="test-list">"#));
        assert!(html.contains(r#"<button class="tag-button" data-key="team">#team:core</button>"#));
        assert!(html.contains("<h3>test1</h3>"));
        assert!(html.contains("<h3>test2</h3>"));
    }

    #[test]
    fn test_page_marks_active_and_filters() {
        let selection: TagSelection = std::iter::once(Tag::new("team", "core")).collect();
        let html = render_page(&explorer(), &selection, &ViewConfig::default());
        assert!(html.contains(
            r#"<button class="tag-button active" data-key="team">#team:core</button>"#
        ));
        assert!(html.contains("<h3>test1</h3>"));
        assert!(!html.contains("<h3>test2</h3>"));
    }

    #[test]
    fn test_fragment_escapes_and_uses_placeholder() {
        let fragment = render_fragment(&explorer().sections(&TagSelection::new()));
        assert!(fragment.contains("<p><strong>Given:</strong> a &lt;user&gt;</p>"));
        assert!(fragment.contains("<p><strong>When:</strong> N/A</p>"));
        assert!(fragment.contains(r#"<span data-key="team">#team:core</span>"#));
    }

    #[test]
    fn test_empty_catalogue_renders_empty_containers() {
        let empty = Explorer::new(Vec::new(), TagOrder::default());
        assert!(render_fragment(&empty.sections(&TagSelection::new())).is_empty());
        assert!(render_buttons(&empty.buttons(&TagSelection::new())).is_empty());
    }
}
