//! Canvas wrapper that mounts a Chart.js radar for one list entry.
//!
//! # Design
//! - Build the chart after the canvas is in the DOM and destroy it on unmount.
//! - Reach the global `Chart` constructor through `Reflect`; a missing library only logs.

use crate::features::catalog::chart::RadarChartConfig;
use gloo::console;
use gloo::utils::window;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RadarChartProps {
    pub metrics: [u8; 5],
    #[prop_or(150)]
    pub width: u32,
    #[prop_or(125)]
    pub height: u32,
}

#[function_component(RadarChart)]
pub(crate) fn radar_chart(props: &RadarChartProps) -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |metrics: &[u8; 5]| {
                let config = RadarChartConfig::for_metrics(*metrics);
                let chart = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| mount_chart(&canvas, &config));
                move || {
                    if let Some(chart) = chart {
                        destroy_chart(&chart);
                    }
                }
            },
            props.metrics,
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="radar-chart"
            width={props.width.to_string()}
            height={props.height.to_string()}
        />
    }
}

fn mount_chart(canvas: &HtmlCanvasElement, config: &RadarChartConfig) -> Option<JsValue> {
    let constructor = match Reflect::get(&window(), &JsValue::from_str("Chart"))
        .and_then(|value| value.dyn_into::<Function>())
    {
        Ok(constructor) => constructor,
        Err(_) => {
            console::warn!("Chart.js is not loaded; skipping radar chart");
            return None;
        }
    };
    let json = match config.to_json() {
        Ok(json) => json,
        Err(err) => {
            console::error!("failed to encode chart config", err.to_string());
            return None;
        }
    };
    let options = js_sys::JSON::parse(&json).ok()?;
    let args = Array::of2(canvas, &options);
    match Reflect::construct(&constructor, &args) {
        Ok(chart) => Some(chart),
        Err(err) => {
            console::error!("failed to create radar chart", err);
            None
        }
    }
}

fn destroy_chart(chart: &JsValue) {
    let destroy = Reflect::get(chart, &JsValue::from_str("destroy"))
        .and_then(|value| value.dyn_into::<Function>());
    if let Ok(destroy) = destroy
        && let Err(err) = destroy.call0(chart)
    {
        console::warn!("failed to destroy radar chart", err);
    }
}
