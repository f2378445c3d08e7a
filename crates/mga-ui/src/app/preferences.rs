//! Persistence and environment helpers for the app shell.

use crate::core::breakpoints::width_from_px;
use crate::core::controls::dom;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use mga_api_models::{CATALOG_PATH, SortOrder};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement};

pub(crate) const SORT_KEY: &str = "mga.catalog.sort_by";

/// Endpoint from the results root's `data-catalog-url`, falling back to the default path.
pub(crate) fn catalog_endpoint(root: &Element) -> String {
    root.get_attribute(dom::CATALOG_URL_ATTR)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| CATALOG_PATH.to_string())
}

pub(crate) fn current_width() -> u32 {
    width_from_px(window().inner_width().ok().and_then(|w| w.as_f64()))
}

pub(crate) fn load_sort() -> Option<SortOrder> {
    LocalStorage::get::<String>(SORT_KEY)
        .ok()
        .and_then(|value| SortOrder::from_value(&value))
}

pub(crate) fn persist_sort(value: &str) {
    if SortOrder::from_value(value).is_none() {
        return;
    }
    if let Err(err) = LocalStorage::set(SORT_KEY, value) {
        console::warn!("failed to persist sort preference", err.to_string());
    }
}

/// Put the remembered sort order back into the selector before the first fetch.
pub(crate) fn restore_sort(document: &Document) {
    let Some(order) = load_sort() else {
        return;
    };
    if let Some(select) = document
        .get_element_by_id(dom::SORT_SELECT)
        .and_then(|node| node.dyn_into::<HtmlSelectElement>().ok())
    {
        select.set_value(order.as_value());
    }
}
