use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::reactor::SectionId;

/// Click handler for in-page `#anchor` links: smooth-scrolls instead of
/// jumping. A bare `#` is left alone.
pub fn anchor_click(on_navigate: &Callback<SectionId>, href: &'static str) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        if let Some(id) = SectionId::from_href(href) {
            e.prevent_default();
            on_navigate.emit(id);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: &'static str,
    pub title: &'static str,
    #[prop_or_default]
    pub subtitle: Option<&'static str>,
    #[prop_or_default]
    pub class: Classes,
    pub visible: bool,
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id}
            class={classes!("section", props.class.clone(), props.visible.then(|| "section--visible"))}
        >
            <div class="container">
                <div class="section__header">
                    <h2 class="section__title">{props.title}</h2>
                    { for props.subtitle.map(|subtitle| html! { <p class="section__subtitle">{subtitle}</p> }) }
                </div>
                { for props.children.iter() }
            </div>
        </section>
    }
}
