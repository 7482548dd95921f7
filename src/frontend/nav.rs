use yew::prelude::*;

use super::dom::scroll_to_section;
use super::hooks::use_scrolled_past;
use crate::content::{NavItem, NAV_ITEMS, PERSONAL_INFO};

const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_scrolled_past(SCROLLED_THRESHOLD_PX);

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let go_to = {
        let menu_open = menu_open.clone();
        Callback::from(move |section_id: &'static str| {
            scroll_to_section(section_id);
            menu_open.set(false);
        })
    };

    let nav_button = |item: &'static NavItem, class: &'static str| {
        let go_to = go_to.clone();
        let onclick = Callback::from(move |_: MouseEvent| go_to.emit(item.section_id));
        html! {
            <button type="button" class={class} onclick={onclick}>
                <span class="nav-number">{format!("{}.", item.number)}</span>
                <span class="neon-link">{item.name}</span>
            </button>
        }
    };

    html! {
        <>
            <nav class={classes!("site-nav", scrolled.then_some("is-scrolled"))}>
                <div class="nav-inner">
                    <div class="nav-logo">
                        <span class="accent">{"<"}</span>
                        {PERSONAL_INFO.initials}
                        <span class="accent">{"/>"}</span>
                    </div>
                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(|item| nav_button(item, "nav-link")) }
                    </div>
                    <button
                        class="nav-toggle"
                        type="button"
                        aria-label="Toggle menu"
                        aria-expanded={(*menu_open).to_string()}
                        onclick={on_toggle}
                    >
                        <span aria-hidden="true">{ if *menu_open { "✕" } else { "☰" } }</span>
                    </button>
                </div>
            </nav>
            <div
                class={classes!("mobile-menu", (*menu_open).then_some("is-open"))}
                aria-hidden={(!*menu_open).to_string()}
            >
                { for NAV_ITEMS.iter().map(|item| nav_button(item, "mobile-link")) }
            </div>
        </>
    }
}
