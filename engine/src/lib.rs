use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub mod build;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod parse;
pub mod selection;
pub mod stopwatch;
pub mod types;

pub use crate::engine::FilterEngine;
pub use crate::error::EngineError;
use crate::types::FacetGroup;

// Use thread_local with RefCell for lazy initialization from JS
thread_local! {
    static ENGINE: RefCell<Option<FilterEngine>> = const { RefCell::new(None) };
}

/// Route `tracing` events to the browser console once the module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    tracing_wasm::set_as_global_default();
    web_sys::console::log_1(&"[init] facet engine loaded".into());
}

fn install_engine(engine: FilterEngine) {
    tracing::info!(
        "[init] products={} groups={}",
        engine.catalog().len(),
        engine.facets().len()
    );
    ENGINE.with(|slot| {
        *slot.borrow_mut() = Some(engine);
    });
}

fn with_engine<T>(f: impl FnOnce(&FilterEngine) -> T) -> Result<T, EngineError> {
    ENGINE.with(|slot| match slot.borrow().as_ref() {
        Some(eng) => Ok(f(eng)),
        None => Err(EngineError::NotInitialized),
    })
}

fn with_engine_mut<T>(f: impl FnOnce(&mut FilterEngine) -> T) -> Result<T, EngineError> {
    ENGINE.with(|slot| match slot.borrow_mut().as_mut() {
        Some(eng) => Ok(f(eng)),
        None => Err(EngineError::NotInitialized),
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Failed to serialize: {}", e)))
}

/// Initialize the engine with a catalog and facet definitions from JavaScript
/// catalog_json: JSON array of products
/// facets_json: JSON object of FacetsConfig (group -> { title, options })
#[wasm_bindgen]
pub fn init_engine(catalog_json: &str, facets_json: &str) -> Result<(), JsError> {
    install_engine(FilterEngine::from_json(catalog_json, facets_json)?);
    Ok(())
}

/// Initialize the engine with the compiled-in storefront catalog
#[wasm_bindgen]
pub fn init_default_engine() {
    install_engine(FilterEngine::with_defaults());
}

/// Check if the engine has been initialized
#[wasm_bindgen]
pub fn is_engine_ready() -> bool {
    ENGINE.with(|engine| engine.borrow().is_some())
}

/// Flip an option in a facet group. Returns true when the option is now checked.
#[wasm_bindgen]
pub fn toggle_option(group: &str, option: &str) -> Result<bool, JsError> {
    let group: FacetGroup = group.parse()?;
    Ok(with_engine_mut(|eng| eng.toggle(group, option))?)
}

/// Reset all facet groups
#[wasm_bindgen]
pub fn clear_filters() -> Result<(), JsError> {
    Ok(with_engine_mut(|eng| eng.clear())?)
}

/// Catalog-wide option counts as JSON
#[wasm_bindgen]
pub fn get_counts() -> Result<String, JsError> {
    with_engine(|eng| to_json(eng.counts()))?
}

/// Products matching the current selection as JSON, in catalog order
#[wasm_bindgen]
pub fn get_filtered() -> Result<String, JsError> {
    with_engine(|eng| to_json(&eng.filtered()))?
}

/// Number of products matching the current selection
#[wasm_bindgen]
pub fn get_result_count() -> Result<usize, JsError> {
    Ok(with_engine(|eng| eng.result_len())?)
}

/// Current selection as JSON
#[wasm_bindgen]
pub fn get_selection() -> Result<String, JsError> {
    with_engine(|eng| to_json(eng.selection().as_ref()))?
}

/// Revision of the selection; changes whenever toggle or clear installs a new one
#[wasm_bindgen]
pub fn get_selection_version() -> Result<u64, JsError> {
    Ok(with_engine(|eng| eng.selection_version())?)
}

/// Sidebar render model as JSON
#[wasm_bindgen]
pub fn get_filter_groups() -> Result<String, JsError> {
    with_engine(|eng| to_json(&eng.filter_groups()))?
}

/// Get total number of products in the catalog
#[wasm_bindgen]
pub fn get_product_count() -> Result<usize, JsError> {
    Ok(with_engine(|eng| eng.catalog().len())?)
}
