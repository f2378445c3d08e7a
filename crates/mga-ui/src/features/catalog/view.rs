//! Catalog browser views.
//!
//! # Design
//! - Render only from the store's `CatalogSession`.
//! - Run reducer commands here: fetches go through the shared client, renders are implicit.
//! - Key entries by render epoch so each render rebuilds the charts.

use crate::app::api::CatalogCtx;
use crate::app::filters::live_filters;
use crate::components::daisy::{Badge, DaisyColor, DaisySize, Pagination};
use crate::components::{EmptyState, RadarChart};
use crate::core::controls::dom;
use crate::core::logic::showing_label;
use crate::core::store::{AppStore, app_dispatch, apply_catalog};
use crate::features::catalog::logic::{BadgeKind, CatalogEntry, build_entries};
use crate::features::catalog::state::{CatalogAction, CatalogCommand, FetchRequest};
use crate::services::api::CatalogClient;
use gloo::console;
use gloo::utils::window;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Feed an action to the reducer and carry out whatever it asks for.
pub(crate) fn dispatch_action(client: &Rc<CatalogClient>, action: CatalogAction) {
    let dispatch = app_dispatch();
    match apply_catalog(&dispatch, action) {
        CatalogCommand::Fetch(request) => spawn_fetch(Rc::clone(client), request),
        CatalogCommand::Render | CatalogCommand::None => {}
    }
}

fn spawn_fetch(client: Rc<CatalogClient>, request: FetchRequest) {
    yew::platform::spawn_local(async move {
        let FetchRequest {
            token,
            origin,
            query,
        } = request;
        let outcome = match client.fetch_page(&query).await {
            Ok(response) => CatalogAction::FetchSucceeded {
                token,
                page_index: query.page_index,
                response,
            },
            Err(error) => {
                console::error!(
                    origin.failure_message(),
                    token.to_string(),
                    error.to_string()
                );
                CatalogAction::FetchFailed {
                    token,
                    origin,
                    error,
                }
            }
        };
        dispatch_action(&client, outcome);
    });
}

#[function_component(CatalogBrowser)]
pub(crate) fn catalog_browser() -> Html {
    let ctx = use_context::<CatalogCtx>();
    let session = use_selector(|store: &AppStore| store.catalog.clone());
    let Some(ctx) = ctx else {
        return html! {
            <div class="alert alert-error">{"Missing catalog context."}</div>
        };
    };

    let on_page = {
        let client = ctx.client.clone();
        Callback::from(move |page_index: u32| {
            dispatch_action(
                &client,
                CatalogAction::GoToPage {
                    page_index,
                    filters: live_filters(),
                },
            );
        })
    };
    let on_load_more = {
        let client = ctx.client.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch_action(
                &client,
                CatalogAction::LoadMore {
                    filters: live_filters(),
                },
            );
        })
    };

    let epoch = session.render_epoch;
    let list = if session.is_empty_result() {
        html! { <li><EmptyState message="No games match your filters" /></li> }
    } else {
        build_entries(&session.items, session.width)
            .into_iter()
            .map(|entry| {
                let key = format!("{epoch}-{}", entry.slug);
                html! { <GameEntry key={key} {entry} /> }
            })
            .collect::<Html>()
    };
    let error = session.last_error.clone().map_or_else(
        || html! {},
        |message| html! { <div class="alert alert-error" role="alert">{message}</div> },
    );
    let nav = session.nav();
    let nav_style = if nav.is_some() { "display: flex;" } else { "display: none;" };
    let showing = showing_label(session.page_index, session.pagination.total_count)
        .unwrap_or_default();
    let load_more_style = if session.load_more_visible() {
        "display: inline-block;"
    } else {
        "display: none;"
    };

    html! {
        <>
            {error}
            <ul id={dom::LIST} class="list gap-3" aria-busy={session.is_pending().to_string()}>
                {list}
            </ul>
            <div
                id={dom::PAGINATION_CONTAINER}
                class="flex flex-col items-center gap-2 mt-4"
                style={nav_style}
            >
                <div id={dom::PAGINATION_INFO} class="text-sm text-base-content/70">{showing}</div>
                <div id={dom::PAGINATION_CONTROLS}>
                    {nav.map_or_else(
                        || html! {},
                        |items| html! { <Pagination {items} on_select={on_page} /> },
                    )}
                </div>
            </div>
            <button
                id={dom::LOAD_MORE}
                type="button"
                class="btn btn-outline mt-4"
                style={load_more_style}
                onclick={on_load_more}
            >
                {"Load more"}
            </button>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct GameEntryProps {
    entry: CatalogEntry,
}

#[function_component(GameEntry)]
fn game_entry(props: &GameEntryProps) -> Html {
    let entry = &props.entry;
    let onclick = {
        let href = entry.href.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = window().location().set_href(&href) {
                console::error!("failed to open game detail", err);
            }
        })
    };
    let badges = entry.badges.iter().map(|(kind, label)| {
        let tone = match kind {
            BadgeKind::Tag => DaisyColor::Primary,
            BadgeKind::AgeGroup => DaisyColor::Info,
        };
        html! {
            <Badge label={label.clone()} {tone} size={DaisySize::Sm} class="mr-1" />
        }
    });
    let votes = &entry.votes;

    html! {
        <li
            class="list-row card bg-base-100 shadow-sm cursor-pointer hover:bg-base-200"
            title={entry.hint.clone()}
            {onclick}
        >
            <div class="grid gap-3 md:grid-cols-3">
                <div class="md:col-span-2">
                    <h5 class="font-bold mb-3">
                        <a href={entry.href.clone()}>{entry.title.clone()}</a>
                    </h5>
                    <div class="mb-2">{ for badges }</div>
                    <p>{entry.description.clone()}</p>
                </div>
                <div class="h-32">
                    <RadarChart metrics={entry.metrics} />
                </div>
                <div class="vote-ratio md:col-span-2">
                    <small class="text-base-content/70">
                        {format!("▲ {} ▼ {} ", votes.upvotes, votes.downvotes)}
                        <Badge
                            label={votes.label.clone()}
                            tone={DaisyColor::from(votes.tier)}
                            size={DaisySize::Sm}
                        />
                    </small>
                </div>
            </div>
        </li>
    }
}
