use log::warn;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::hooks::use_escape;
use crate::scroll::reactor::SectionId;

pub const HEADER_ID: &str = "header";

pub const NAV_LINKS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("services", "Services"),
    ("industries", "Industries"),
    ("projects", "Projects"),
    ("process", "Process"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

const BAR_TRANSITION: &str = "all 600ms cubic-bezier(0.16, 1, 0.3, 1)";

/// Inline style for hamburger bar `index` (0..3).
pub fn bar_style(index: usize, open: bool) -> String {
    let shape = match (open, index) {
        (true, 0) => "transform: rotate(45deg) translate(6px, 6px);",
        (true, 1) => "opacity: 0;",
        (true, _) => "transform: rotate(-45deg) translate(6px, -6px);",
        (false, _) => "",
    };
    format!("{} transition: {};", shape, BAR_TRANSITION).trim_start().to_string()
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub scrolled: bool,
    pub active: Option<SectionId>,
    pub on_navigate: Callback<SectionId>,
    pub mobile_breakpoint: f64,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { scrolled, active, on_navigate, mobile_breakpoint } = props;
    let menu_open = use_state(|| false);
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Lock page scroll behind the open mobile menu
    use_effect_with_deps(
        |open| {
            let overflow = if *open { "hidden" } else { "" };
            if let Err(e) = dom::body().and_then(|body| dom::set_style(&body, "overflow", overflow)) {
                warn!("Could not toggle body scroll: {}", e);
            }
            || ()
        },
        *menu_open,
    );

    {
        let menu_open = menu_open.setter();
        let toggle_ref = toggle_ref.clone();
        // The toggle sits outside the nav and handles its own clicks
        use_click_away(nav_ref.clone(), move |e: Event| {
            if dom::is_outside(&e, &[toggle_ref.cast::<Element>()]) {
                menu_open.set(false);
            }
        });
    }

    {
        let menu_open = menu_open.setter();
        use_escape(Callback::from(move |_| menu_open.set(false)));
    }

    {
        let menu_open = menu_open.setter();
        let breakpoint = *mobile_breakpoint;
        use_event_with_window("resize", move |_: Event| {
            if dom::inner_width().map_or(false, |width| width > breakpoint) {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let follow_link = |id: &'static str| {
        let menu_open = menu_open.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(SectionId::new(id));
            menu_open.set(false);
        })
    };

    html! {
        <header id={HEADER_ID} class={classes!("header", scrolled.then(|| "header--scrolled"))}>
            <div class="container header__inner">
                <a href="#home" class="logo" onclick={follow_link("home")}>
                    {"HALO"}<span class="logo__tag">{"IT Services"}</span>
                </a>
                <nav id="nav" ref={nav_ref} class={classes!("nav", (*menu_open).then(|| "nav--open"))}>
                    <ul class="nav__list">
                        { for NAV_LINKS.iter().map(|&(id, label)| {
                            let section = SectionId::new(id);
                            let is_active = active.as_ref() == Some(&section);
                            html! {
                                <li class="nav__item">
                                    <a
                                        href={section.href()}
                                        class={classes!("nav__link", is_active.then(|| "nav__link--active"))}
                                        onclick={follow_link(id)}
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </nav>
                <button
                    id="navToggle"
                    ref={toggle_ref}
                    class={classes!("nav__toggle", (*menu_open).then(|| "nav__toggle--active"))}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    { for (0..3).map(|index| html! { <span style={bar_style(index, *menu_open)}></span> }) }
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_bars_form_a_cross() {
        assert_eq!(
            bar_style(0, true),
            "transform: rotate(45deg) translate(6px, 6px); transition: all 600ms cubic-bezier(0.16, 1, 0.3, 1);"
        );
        assert!(bar_style(1, true).starts_with("opacity: 0;"));
        assert!(bar_style(2, true).contains("rotate(-45deg) translate(6px, -6px)"));
    }

    #[test]
    fn closed_bars_only_keep_transition() {
        for index in 0..3 {
            assert_eq!(bar_style(index, false), "transition: all 600ms cubic-bezier(0.16, 1, 0.3, 1);");
        }
    }

    #[test]
    fn nav_links_are_unique() {
        let mut ids: Vec<_> = NAV_LINKS.iter().map(|(id, _)| *id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_LINKS.len());
    }
}
