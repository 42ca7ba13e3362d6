//! Tag filter bar
//!
//! One toggle per distinct tag, built once at load. Only the `active`
//! class follows the selection afterwards.

use std::sync::Arc;

use leptos::prelude::*;
use testgen_core::{Explorer, Tag, TagSelection};

/// Filter bar with a button per tag in the catalogue
#[component]
pub fn FilterBar(explorer: Arc<Explorer>, selection: RwSignal<TagSelection>) -> impl IntoView {
    explorer
        .universe()
        .iter()
        .cloned()
        .map(|tag| view! { <TagToggle tag=tag selection=selection /> })
        .collect_view()
}

/// A single `#key:value` toggle
#[component]
pub fn TagToggle(tag: Tag, selection: RwSignal<TagSelection>) -> impl IntoView {
    let label = tag.label();
    let key = tag.key.clone();
    let watched = tag.clone();

    view! {
        <button
            class="tag-button"
            class:active=move || selection.with(|s| s.is_active(&watched))
            data-key=key
            on:click=move |_| {
                selection.update(|s| {
                    s.toggle(&tag);
                });
            }
        >
            {label}
        </button>
    }
}
