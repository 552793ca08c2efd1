use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::contact_form::Contact;
use crate::components::faq::Faq;
use crate::components::header::Header;
use crate::components::hero::{Hero, HERO_SHAPE_COUNT};
use crate::components::scroll_progress::ScrollProgress;
use crate::components::sections::{Blog, Footer, Industries, Process, Projects, Services, Technology};
use crate::config::SiteConfig;
use crate::hooks::use_scroll_reactor;
use crate::scroll::page_state::PageState;
use crate::scroll::reactor::{ScrollReactor, SectionId};
use crate::scroll::smooth::SmoothScroller;

#[function_component(Landing)]
pub fn landing() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let reactor = use_memo(|config| ScrollReactor::new(config.reactor()), config.clone());
    let page = use_reducer(move || PageState::new(reactor));

    use_scroll_reactor(
        page.dispatcher(),
        HERO_SHAPE_COUNT,
        config.scroll_debounce_ms,
        config.resize_debounce_ms,
    );

    let scroller = use_memo(|config| SmoothScroller::new(config), config.clone());
    let on_navigate = Callback::from(move |id: SectionId| {
        if let Err(e) = scroller.scroll_to_section(&id) {
            warn!("Could not scroll to #{}: {}", id, e);
        }
    });

    let stagger_ms = config.card_stagger_ms;
    let parallax: Vec<f64> = (0..HERO_SHAPE_COUNT).map(|index| page.parallax_at(index)).collect();

    html! {
        <>
            <ScrollProgress />
            <Header
                scrolled={page.scrolled}
                active={page.active.clone()}
                on_navigate={on_navigate.clone()}
                mobile_breakpoint={config.mobile_breakpoint}
            />
            <main>
                <Hero parallax={parallax} on_navigate={on_navigate.clone()} />
                <Services visible={page.is_revealed("services")} stagger_ms={stagger_ms} />
                <Industries visible={page.is_revealed("industries")} stagger_ms={stagger_ms} />
                <Projects visible={page.is_revealed("projects")} stagger_ms={stagger_ms} />
                <Process visible={page.is_revealed("process")} stagger_ms={stagger_ms} />
                <Technology visible={page.is_revealed("technology")} stagger_ms={stagger_ms} />
                <Blog visible={page.is_revealed("blog")} stagger_ms={stagger_ms} />
                <Faq visible={page.is_revealed("faq")} />
                <Contact
                    visible={page.is_revealed("contact")}
                    submit_delay_ms={config.submit_delay_ms}
                    success_dismiss_ms={config.success_dismiss_ms}
                />
            </main>
            <Footer on_navigate={on_navigate} />
        </>
    }
}
