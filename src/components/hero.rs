use yew::prelude::*;

use crate::components::section::anchor_click;
use crate::hooks::use_stagger;
use crate::schedule::Stagger;
use crate::scroll::reactor::SectionId;

pub const HERO_SHAPE_COUNT: usize = 3;

const INTRO_PARTS: usize = 3;

/// Title, subtitle and actions fade in one after another once mounted.
fn intro() -> Stagger {
    Stagger::new(400).after(300)
}

pub fn intro_style(index: usize, shown: usize) -> &'static str {
    if index < shown {
        "opacity: 1; transform: translateY(0);"
    } else {
        ""
    }
}

pub fn shape_style(offset: f64) -> String {
    format!("transform: translateY({}px);", offset)
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub parallax: Vec<f64>,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let shown = use_stagger(INTRO_PARTS, intro(), true);
    let offset = |index: usize| props.parallax.get(index).copied().unwrap_or(0.0);

    html! {
        <section id="home" class="hero">
            <div class="hero__background" aria-hidden="true">
                { for (0..HERO_SHAPE_COUNT).map(|index| html! {
                    <div
                        class={classes!("hero__shape", format!("hero__shape--{}", index + 1))}
                        style={shape_style(offset(index))}
                    ></div>
                }) }
            </div>
            <div class="container hero__content">
                <h1 class="hero__title" style={intro_style(0, shown)}>
                    {"Technology that keeps your business moving"}
                </h1>
                <p class="hero__subtitle" style={intro_style(1, shown)}>
                    {"HALO IT Services designs, secures and runs the infrastructure behind growing companies, so your team can focus on the work that matters."}
                </p>
                <div class="hero__actions" style={intro_style(2, shown)}>
                    <a href="#contact" class="btn btn--primary" onclick={anchor_click(&props.on_navigate, "#contact")}>
                        {"Book a Consultation"}
                    </a>
                    <a href="#services" class="btn btn--outline" onclick={anchor_click(&props.on_navigate, "#services")}>
                        {"Explore Services"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_parts_appear_in_order() {
        assert_eq!(intro_style(0, 0), "");
        assert_eq!(intro_style(0, 1), "opacity: 1; transform: translateY(0);");
        assert_eq!(intro_style(2, 2), "");
        assert_eq!(intro().delay(2), 1100);
    }

    #[test]
    fn shapes_translate_by_offset() {
        assert_eq!(shape_style(-30.0), "transform: translateY(-30px);");
        assert_eq!(shape_style(-4.5), "transform: translateY(-4.5px);");
    }
}
