use yew::prelude::*;

use super::hooks::use_pointer_glow;
use crate::hover::Highlight;

#[derive(Properties, PartialEq)]
pub struct GlowCardProps {
    #[prop_or_default]
    pub class: Classes,
    /// Painted as the card's own background.
    #[prop_or_default]
    pub wash: Option<Highlight>,
    /// Painted in an overlay above the wash.
    pub spot: Highlight,
    #[prop_or_default]
    pub children: Html,
}

/// Card that lights up under the pointer. Each instance tracks its own container.
#[function_component(GlowCard)]
pub fn glow_card(props: &GlowCardProps) -> Html {
    let container = use_node_ref();
    let position = use_pointer_glow(container.clone());

    let wash_style = props
        .wash
        .and_then(|wash| wash.gradient(position))
        .map(|gradient| format!("background: {gradient};"));
    let spot_style = props
        .spot
        .gradient(position)
        .map(|gradient| format!("background: {gradient};"));

    html! {
        <div
            ref={container}
            class={classes!("glow-card", props.class.clone(), position.is_hovering.then_some("is-lit"))}
            style={wash_style}
        >
            if let Some(spot_style) = spot_style {
                <div class="glow-spot" aria-hidden="true" style={spot_style}></div>
            }
            <div class="glow-body">{props.children.clone()}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label={props.aria_label.clone()}
        >
            {props.children.clone()}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}
