mod dom;
mod glow;
mod hooks;
mod nav;
mod rain;
mod sections;

use serde_json::json;
use web_sys::{window, Element};
use yew::prelude::*;

use self::dom::{prefers_reduced_motion, set_root_scroll_behavior};
use self::nav::Navigation;
use self::rain::MatrixRain;
use self::sections::{ContactSection, ExperienceSection, Hero, ProjectsSection, TechStackSection};
use crate::config::SiteConfig;
use crate::logging::{self, log_event, LogLevel};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    use_effect_with((), |_| {
        set_root_scroll_behavior("smooth");
        || set_root_scroll_behavior("auto")
    });

    let config = props.config;
    let show_rain = config.rain.enabled && !prefers_reduced_motion();

    html! {
        <div class="page-shell">
            if show_rain {
                <MatrixRain settings={config.rain} />
            }
            <Navigation />
            <main class="page-content">
                <Hero timing={config.typewriter} />
                <ProjectsSection />
                <TechStackSection />
                <ExperienceSection />
                <ContactSection />
            </main>
        </div>
    }
}

fn read_site_config(root: &Element) -> SiteConfig {
    let raw = root.get_attribute("data-config").unwrap_or_default();

    SiteConfig::from_json(&raw).unwrap_or_else(|error| {
        log_event(
            LogLevel::Warn,
            "site_config_invalid",
            json!({ "error": error.to_string() }),
        );
        SiteConfig::default()
    })
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let config = read_site_config(&root);
    logging::set_level(config.log_level);
    log_event(
        LogLevel::Debug,
        "app_mounted",
        json!({
            "rain": config.rain.enabled,
            "typeIntervalMs": config.typewriter.type_interval.as_millis() as u64,
        }),
    );

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
