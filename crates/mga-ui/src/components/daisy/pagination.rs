//! Windowed page navigation.

use mga_api_models::paging::NavItem;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    /// Items from `paging::build_nav`.
    pub items: Vec<NavItem>,
    /// Receives the zero-based page index to load.
    #[prop_or_default]
    pub on_select: Callback<u32>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let link = |label: String, target: Option<u32>, active: bool, aria: Option<&'static str>| {
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(page_index) = target {
                on_select.emit(page_index);
            }
        });
        html! {
            <button
                type="button"
                class={classes!("join-item", "btn", "btn-sm", active.then_some("btn-active"))}
                disabled={target.is_none() && !active}
                aria-label={aria}
                aria-current={active.then_some("page")}
                {onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <nav class="join" aria-label="Pagination">
            { for props.items.iter().map(|item| match *item {
                NavItem::Prev { target } => link("«".to_string(), target, false, Some("Previous")),
                NavItem::Next { target } => link("»".to_string(), target, false, Some("Next")),
                NavItem::Page { number, active, target } => link(number.to_string(), target, active, None),
                NavItem::Ellipsis => html! {
                    <button type="button" class="join-item btn btn-sm btn-disabled" disabled=true>{"…"}</button>
                },
            }) }
        </nav>
    }
}
