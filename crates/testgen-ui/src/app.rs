//! Explorer startup
//!
//! Loads the catalogue, then mounts the filter bar and the test list into
//! the two containers already present in the page. Both views share one
//! selection signal.

use std::sync::Arc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use testgen_core::{Explorer, FileRecord, TagSelection, ViewConfig};
use wasm_bindgen::JsCast;

use crate::components::{FilterBar, TestList};
use crate::error::{ExplorerError, Result};
use crate::state::fetch_catalogue;

/// Fetch the catalogue and mount the explorer.
///
/// # Errors
///
/// Returns an error if the fetch fails or a container is missing; nothing
/// is mounted in either case.
pub async fn run(config: ViewConfig) -> Result<()> {
    let files = fetch_catalogue(&config.data_path).await?;
    mount_explorer(files, &config)
}

/// Mount the filter bar and test list for an already loaded catalogue.
///
/// # Errors
///
/// Returns [`ExplorerError::ContainerNotFound`] if either container is
/// missing from the document.
pub fn mount_explorer(files: Vec<FileRecord>, config: &ViewConfig) -> Result<()> {
    let filter_container = container(&config.filter_element_id)?;
    let list_container = container(&config.list_element_id)?;

    let explorer = Arc::new(Explorer::new(files, config.tag_priority.clone()));
    let selection = ArcRwSignal::new(TagSelection::new());

    web_sys::console::log_1(
        &format!(
            "Loaded {} files, {} tags",
            explorer.files().len(),
            explorer.universe().len()
        )
        .into(),
    );

    {
        let explorer = Arc::clone(&explorer);
        let selection = selection.clone();
        mount_to(filter_container, move || {
            let selection = RwSignal::from(selection);
            view! { <FilterBar explorer=explorer selection=selection /> }
        })
        .forget();
    }

    mount_to(list_container, move || {
        let selection = RwSignal::from(selection);
        view! { <TestList explorer=explorer selection=selection /> }
    })
    .forget();

    Ok(())
}

/// Look up a container by id
fn container(id: &str) -> Result<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| ExplorerError::ContainerNotFound { id: id.to_string() })
}

/// Console message for a startup failure
#[must_use]
pub fn error_message(error: &ExplorerError) -> String {
    match error {
        ExplorerError::Fetch(fetch) => format!("Error fetching JSON data: {fetch}"),
        ExplorerError::ContainerNotFound { .. } => format!("Explorer not mounted: {error}"),
    }
}

/// Report a startup failure on the console
pub fn log_error(error: &ExplorerError) {
    web_sys::console::error_1(&error_message(error).into());
}
