//! Behavioral tests for toggling tags against the bundled sample

use testgen_core::{Explorer, Tag, TagOrder, TagSelection, parse_catalogue};

fn sample_explorer() -> Explorer {
    let files = parse_catalogue(include_str!("../../sample.json")).unwrap_or_default();
    Explorer::new(files, TagOrder::default())
}

fn visible_methods(explorer: &Explorer, selection: &TagSelection) -> Vec<String> {
    explorer
        .sections(selection)
        .into_iter()
        .flat_map(|s| s.cards.into_iter().map(|c| c.method))
        .collect()
}

#[test]
fn given_sample_when_building_filter_bar_then_priority_order() {
    // Given
    let explorer = sample_explorer();

    // When
    let labels: Vec<String> = explorer
        .buttons(&TagSelection::new())
        .iter()
        .map(|b| b.label())
        .collect();

    // Then
    assert_eq!(
        labels,
        vec![
            "#team:core",
            "#team:infra",
            "#module:login",
            "#info:regression",
            "#info:smoke",
        ]
    );
}

#[test]
fn given_no_selection_when_rendering_then_all_four_tests_show() {
    // Given
    let explorer = sample_explorer();

    // When
    let methods = visible_methods(&explorer, &TagSelection::new());

    // Then
    assert_eq!(methods.len(), 4);
}

#[test]
fn given_two_active_tags_when_rendering_then_only_tests_with_both() {
    // Given
    let explorer = sample_explorer();
    let mut selection = TagSelection::new();

    // When
    selection.toggle(&Tag::new("team", "core"));
    selection.toggle(&Tag::new("module", "login"));

    // Then
    assert_eq!(
        visible_methods(&explorer, &selection),
        vec!["func testSignIn()"]
    );
}

#[test]
fn given_infra_filter_when_rendering_then_login_file_omitted_and_untagged_hidden() {
    // Given
    let explorer = sample_explorer();
    let selection: TagSelection = std::iter::once(Tag::new("team", "infra")).collect();

    // When
    let sections = explorer.sections(&selection);

    // Then
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].filename, "SettingsUITests.swift");
    assert_eq!(sections[0].cards.len(), 1);
    assert_eq!(sections[0].cards[0].given, "N/A");
}

#[test]
fn given_active_tag_when_toggled_twice_then_button_inactive_again() {
    // Given
    let explorer = sample_explorer();
    let mut selection = TagSelection::new();
    let tag = Tag::new("info", "smoke");

    // When
    selection.toggle(&tag);
    let active = explorer.buttons(&selection);
    selection.toggle(&tag);

    // Then
    assert!(active.iter().any(|b| b.tag == tag && b.active));
    assert!(explorer.buttons(&selection).iter().all(|b| !b.active));
}
