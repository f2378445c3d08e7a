//! Notice shown in place of the results list when a search matches nothing.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub message: AttrValue,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="alert alert-info" role="status">{props.message.clone()}</div>
    }
}
