use std::rc::Rc;

use log::info;
use stylist::yew::Global;
use yew::prelude::*;

mod config;
mod dom;
mod error;
mod form;
mod hooks;
mod schedule;
mod styles;
mod tilt;
mod scroll {
    pub mod animator;
    pub mod debounce;
    pub mod page_state;
    pub mod progress;
    pub mod reactor;
    pub mod smooth;
}
mod components {
    pub mod cards;
    pub mod contact_form;
    pub mod faq;
    pub mod header;
    pub mod hero;
    pub mod scroll_progress;
    pub mod section;
    pub mod sections;
}
mod pages {
    pub mod landing;
}

use config::SiteConfig;
use hooks::use_page_chrome;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| SiteConfig::load(), ());
    use_page_chrome();

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <Global css={styles::interactions()} />
            <Landing />
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting HALO IT Services site");
    yew::Renderer::<App>::new().render();
}
