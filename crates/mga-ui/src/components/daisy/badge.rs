use crate::components::daisy::foundations::{DaisyColor, DaisySize, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    pub label: AttrValue,
    pub tone: DaisyColor,
    #[prop_or_default]
    pub size: DaisySize,
    #[prop_or_default]
    pub class: Classes,
}

/// Pill used for tags, age groups and the vote summary.
#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    let classes = classes!(
        "badge",
        props.size.with_prefix("badge"),
        tone_class("badge", props.tone),
        props.class.clone()
    );
    html! { <span class={classes}>{props.label.clone()}</span> }
}
