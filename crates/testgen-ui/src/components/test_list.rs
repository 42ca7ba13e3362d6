//! Filtered test list
//!
//! The whole list is rebuilt from [`Explorer::sections`] whenever the
//! selection changes; there is no per-card diffing.

use std::sync::Arc;

use leptos::prelude::*;
use testgen_core::{Explorer, FileSection, TagSelection, TestCard};

/// Every file with passing tests under the current selection
#[component]
pub fn TestList(explorer: Arc<Explorer>, selection: RwSignal<TagSelection>) -> impl IntoView {
    move || {
        selection
            .with(|s| explorer.sections(s))
            .into_iter()
            .map(|section| view! { <FileItem section=section /> })
            .collect_view()
    }
}

/// A file heading and its test cards
#[component]
pub fn FileItem(section: FileSection) -> impl IntoView {
    let cards = section
        .cards
        .into_iter()
        .map(|card| view! { <TestItem card=card /> })
        .collect_view();

    view! {
        <div class="file-item">
            <h2>{section.filename}</h2>
            <div class="test-list">{cards}</div>
        </div>
    }
}

/// Method name, tags, and the GIVEN/WHEN/THEN fields of one test
#[component]
pub fn TestItem(card: TestCard) -> impl IntoView {
    let tags = card
        .tags
        .iter()
        .map(|tag| {
            let key = tag.key.clone();
            let label = tag.label();
            view! { <span data-key=key>{label}</span> }
        })
        .collect_view();

    let fields = card
        .fields()
        .map(|(label, value)| {
            let value = value.to_string();
            view! {
                <p><strong>{format!("{label}:")}</strong>" "{value}</p>
            }
        })
        .into_iter()
        .collect_view();

    view! {
        <div class="test-item">
            <h3>{card.method.clone()}</h3>
            <div class="tags">{tags}</div>
            <div class="test-details">{fields}</div>
        </div>
    }
}
