//! WASM entry point for the test explorer
//!
//! Trunk compiles this to WASM. The page must already contain the
//! `tag-filter` and `test-list` containers.

use testgen_core::ViewConfig;
use testgen_ui::app::{log_error, run};

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        if let Err(error) = run(ViewConfig::default()).await {
            log_error(&error);
        }
    });
}
