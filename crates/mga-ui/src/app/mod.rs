//! App shell: boots the catalog browser or the detail page depending on the markup present.

use crate::app::api::CatalogCtx;
use crate::app::filters::{init_sliders, live_filters};
use crate::core::controls::dom;
use crate::features::catalog::state::{CatalogAction, FetchOrigin};
use crate::features::catalog::view::{CatalogBrowser, dispatch_action};
use crate::features::detail::view::{is_detail_page, mount_detail};
use crate::services::api::CatalogClient;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use preferences::{catalog_endpoint, current_width, persist_sort, restore_sort};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;

pub(crate) mod api;
pub(crate) mod filters;
mod preferences;

#[derive(Properties, PartialEq)]
pub(crate) struct CatalogAppProps {
    pub endpoint: AttrValue,
}

#[function_component(CatalogApp)]
pub(crate) fn catalog_app(props: &CatalogAppProps) -> Html {
    let ctx = {
        let endpoint = props.endpoint.to_string();
        use_memo(move |_| CatalogCtx::new(endpoint), ())
    };
    {
        let client = ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = bind_controls(&client);
                dispatch_action(
                    &client,
                    CatalogAction::Resized {
                        width: current_width(),
                    },
                );
                dispatch_action(
                    &client,
                    CatalogAction::Load {
                        filters: live_filters(),
                    },
                );
                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <ContextProvider<CatalogCtx> context={(*ctx).clone()}>
            <CatalogBrowser />
        </ContextProvider<CatalogCtx>>
    }
}

fn submit(client: &Rc<CatalogClient>, origin: FetchOrigin) {
    dispatch_action(
        client,
        CatalogAction::Submit {
            filters: live_filters(),
            origin,
        },
    );
}

/// Attach listeners to the server-rendered filter panel and the window.
fn bind_controls(client: &Rc<CatalogClient>) -> Vec<EventListener> {
    let document = document();
    let mut listeners = Vec::new();

    for (id, origin) in [
        (dom::APPLY_BUTTON, FetchOrigin::Filter),
        (dom::SEARCH_BUTTON, FetchOrigin::Search),
    ] {
        match document.get_element_by_id(id) {
            Some(button) => {
                let client = client.clone();
                listeners.push(EventListener::new(&button, "click", move |_event| {
                    submit(&client, origin);
                }));
            }
            None => console::warn!("filter control missing", id),
        }
    }

    if let Some(input) = document.get_element_by_id(dom::SEARCH_INPUT) {
        let client = client.clone();
        let options = EventListenerOptions::enable_prevent_default();
        listeners.push(EventListener::new_with_options(
            &input,
            "keypress",
            options,
            move |event| {
                let is_enter = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == "Enter");
                if is_enter {
                    event.prevent_default();
                    submit(&client, FetchOrigin::Search);
                }
            },
        ));
    }

    if let Some(select) = document.get_element_by_id(dom::SORT_SELECT) {
        listeners.push(EventListener::new(&select, "change", move |event| {
            if let Some(select) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            {
                persist_sort(&select.value());
            }
        }));
    }

    let client = client.clone();
    listeners.push(EventListener::new(&window(), "resize", move |_event| {
        dispatch_action(
            &client,
            CatalogAction::Resized {
                width: current_width(),
            },
        );
    }));

    listeners
}

/// Boot whichever page the current document is.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = document();

    if is_detail_page(&document) {
        mount_detail(&document);
    }

    let Some(root) = document.get_element_by_id(dom::BROWSER_ROOT) else {
        return;
    };
    init_sliders(&document);
    restore_sort(&document);
    let endpoint = catalog_endpoint(&root);
    console::log!("catalog browser starting", endpoint.clone());
    yew::Renderer::<CatalogApp>::with_root_and_props(
        root,
        CatalogAppProps {
            endpoint: endpoint.into(),
        },
    )
    .render();
}
