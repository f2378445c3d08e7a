//! DOM adapters for the filter panel.
//!
//! # Design
//! - Implement [`ControlSource`] over the live document; every read hits the DOM.
//! - Talk to noUiSlider through `Reflect` so a missing widget degrades to the full range.

use crate::core::controls::{
    CheckboxGroup, ControlSource, dom, handle_label, read_filters, slider_options,
};
use gloo::console;
use gloo::utils::{document, window};
use js_sys::{Array, Function, Reflect};
use mga_api_models::{CatalogFilters, Metric, SortOrder};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlInputElement, HtmlSelectElement};

pub(crate) struct DomControls {
    document: Document,
}

impl DomControls {
    pub(crate) const fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ControlSource for DomControls {
    fn checked_values(&self, group: CheckboxGroup) -> Vec<String> {
        let Ok(nodes) = self.document.query_selector_all(group.checked_selector()) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .collect()
    }

    fn range_values(&self, metric: Metric) -> Option<(f64, f64)> {
        let element = self.document.get_element_by_id(&dom::slider_id(metric))?;
        let api = slider_api(&element)?;
        let get = method(&api, "get")?;
        let values: Array = get.call0(&api).ok()?.dyn_into().ok()?;
        Some((handle_value(&values.get(0))?, handle_value(&values.get(1))?))
    }

    fn search_text(&self) -> String {
        self.document
            .get_element_by_id(dom::SEARCH_INPUT)
            .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn sort_value(&self) -> String {
        self.document
            .get_element_by_id(dom::SORT_SELECT)
            .and_then(|node| node.dyn_into::<HtmlSelectElement>().ok())
            .map_or_else(
                || SortOrder::default().as_value().to_string(),
                |select| select.value(),
            )
    }
}

/// Snapshot of the filter panel as it is right now.
pub(crate) fn live_filters() -> CatalogFilters {
    read_filters(&DomControls::new(document()))
}

fn slider_api(element: &JsValue) -> Option<JsValue> {
    let api = Reflect::get(element, &JsValue::from_str("noUiSlider")).ok()?;
    (!api.is_undefined() && !api.is_null()).then_some(api)
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn handle_value(value: &JsValue) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_string().and_then(|text| text.trim().parse().ok()))
}

/// Create a noUiSlider on every range filter and keep its labels in sync.
pub(crate) fn init_sliders(document: &Document) {
    let Ok(factory) = Reflect::get(&window(), &JsValue::from_str("noUiSlider")) else {
        return;
    };
    let Some(create) = method(&factory, "create") else {
        console::warn!("noUiSlider is not loaded; range filters use their full span");
        return;
    };
    let Ok(options) = js_sys::JSON::parse(&slider_options().to_string()) else {
        return;
    };
    for metric in Metric::ALL {
        let Some(element) = document.get_element_by_id(&dom::slider_id(metric)) else {
            continue;
        };
        if let Err(err) = create.call2(&factory, &element, &options) {
            console::error!("failed to create slider", dom::slider_id(metric), err);
            continue;
        }
        bind_labels(document, &element, metric);
    }
}

fn bind_labels(document: &Document, element: &JsValue, metric: Metric) {
    let Some(api) = slider_api(element) else {
        return;
    };
    let Some(on) = method(&api, "on") else {
        return;
    };
    let (min_id, max_id) = dom::slider_label_ids(metric);
    let min_label = document.get_element_by_id(&min_id);
    let max_label = document.get_element_by_id(&max_id);
    let handler = Closure::<dyn FnMut(JsValue, JsValue)>::new(
        move |values: JsValue, handle: JsValue| {
            let Ok(values) = values.dyn_into::<Array>() else {
                return;
            };
            let first = handle.as_f64().is_none_or(|index| index < 0.5);
            let Some(raw) = handle_value(&values.get(u32::from(!first))) else {
                return;
            };
            let label = if first { &min_label } else { &max_label };
            if let Some(label) = label {
                label.set_text_content(Some(&handle_label(raw)));
            }
        },
    );
    if on
        .call2(&api, &JsValue::from_str("update"), handler.as_ref())
        .is_ok()
    {
        handler.forget();
    }
}
