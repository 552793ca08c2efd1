//! Cards and the hover micro-interactions that go with them.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::hooks::{use_intersection, ANIMATE_IN, LAZY_LOAD};
use crate::tilt::Tilt;

const EASE: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Service,
    Industry,
    Project,
    Benefit,
    Blog,
    ProcessStep,
    TechCategory,
}

impl CardKind {
    pub fn class(self) -> &'static str {
        match self {
            CardKind::Service => "service-card",
            CardKind::Industry => "industry-card",
            CardKind::Project => "project-card",
            CardKind::Benefit => "benefit-card",
            CardKind::Blog => "blog-card",
            CardKind::ProcessStep => "process-step",
            CardKind::TechCategory => "tech-category",
        }
    }

    pub fn tilts(self) -> bool {
        matches!(self, CardKind::Service | CardKind::Project | CardKind::Industry)
    }

    pub fn lazy_loads(self) -> bool {
        matches!(self, CardKind::Service | CardKind::Project | CardKind::Blog)
    }

    /// Tech categories only appear once scrolled into view.
    pub fn joins_section_stagger(self) -> bool {
        !matches!(self, CardKind::TechCategory)
    }
}

/// Classes for a card given how far its reveal has got.
pub fn card_classes(kind: CardKind, revealed: bool, loaded: bool) -> Classes {
    classes!(
        kind.class(),
        "animate-element",
        revealed.then(|| "animate-in"),
        loaded.then(|| "loaded")
    )
}

/// A card is revealed by its section's stagger or by scrolling into view,
/// whichever comes first.
#[hook]
fn use_card_reveal(node: NodeRef, kind: CardKind, staggered: bool) -> Classes {
    let in_view = use_intersection(node.clone(), ANIMATE_IN, true);
    let loaded = use_intersection(node, LAZY_LOAD, kind.lazy_loads());
    card_classes(kind, (staggered && kind.joins_section_stagger()) || in_view, loaded)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hover {
    pub inside: bool,
    pub tilt: Option<Tilt>,
}

impl Hover {
    pub fn card_style(&self) -> String {
        let mut style = String::new();
        if self.inside {
            style.push_str(&format!("transition: all 600ms {};", EASE));
        }
        if let Some(tilt) = self.tilt {
            style.push_str(&format!(" transform: {};", tilt.transform()));
        }
        style.trim_start().to_string()
    }

    pub fn icon_style(&self) -> String {
        if self.inside {
            format!("transition: all 400ms {};", EASE)
        } else {
            String::new()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub kind: CardKind,
    pub title: &'static str,
    #[prop_or_default]
    pub icon: Option<&'static str>,
    #[prop_or_default]
    pub staggered: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let node = use_node_ref();
    let classes = use_card_reveal(node.clone(), props.kind, props.staggered);
    let hover = use_state(Hover::default);
    let tilts = props.kind.tilts();

    let on_enter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| {
            if tilts {
                hover.set(Hover { inside: true, ..*hover });
            }
        })
    };
    let on_leave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(Hover::default()))
    };
    let on_move = {
        let hover = hover.clone();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            if !tilts {
                return;
            }
            if let Some(card) = node.cast::<Element>() {
                let rect = card.get_bounding_client_rect();
                let tilt = Tilt::from_pointer(
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                    rect.width(),
                    rect.height(),
                );
                hover.set(Hover { inside: true, tilt: Some(tilt) });
            }
        })
    };

    html! {
        <article
            ref={node}
            class={classes}
            style={hover.card_style()}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onmousemove={on_move}
        >
            { for props.icon.map(|icon| html! { <div class="icon" style={hover.icon_style()}>{icon}</div> }) }
            <h3 class="card__title">{props.title}</h3>
            { for props.children.iter() }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ListItemProps {
    pub text: &'static str,
}

#[function_component(ServiceListItem)]
pub fn service_list_item(props: &ListItemProps) -> Html {
    let hovered = use_state(|| false);
    let style = if *hovered {
        format!("transform: translateX(5px); transition: all 200ms {};", EASE)
    } else {
        String::new()
    };
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    html! {
        <li style={style} onmouseenter={on_enter} onmouseleave={on_leave}>{props.text}</li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProcessStepProps {
    pub number: u8,
    pub title: &'static str,
    pub text: &'static str,
    #[prop_or_default]
    pub staggered: bool,
}

#[function_component(ProcessStep)]
pub fn process_step(props: &ProcessStepProps) -> Html {
    let node = use_node_ref();
    let classes = use_card_reveal(node.clone(), CardKind::ProcessStep, props.staggered);
    let hovered = use_state(|| false);
    let number_style = if *hovered {
        format!("transform: scale(1.1) rotate(5deg); transition: all 300ms {};", EASE)
    } else {
        String::new()
    };
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    html! {
        <div ref={node} class={classes} onmouseenter={on_enter} onmouseleave={on_leave}>
            <span class="process-step__number" style={number_style}>{format!("{:02}", props.number)}</span>
            <h3 class="process-step__title">{props.title}</h3>
            <p>{props.text}</p>
        </div>
    }
}

/// Live ripples on a tech tag, oldest first. Every ripple lives for the
/// same time, so they always expire in spawn order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ripples {
    next_id: u32,
    pub live: Vec<u32>,
}

pub enum RippleAction {
    Spawn,
    Expire,
}

impl Reducible for Ripples {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut ripples = (*self).clone();
        match action {
            RippleAction::Spawn => {
                ripples.live.push(ripples.next_id);
                ripples.next_id = ripples.next_id.wrapping_add(1);
            }
            RippleAction::Expire => {
                if !ripples.live.is_empty() {
                    ripples.live.remove(0);
                }
            }
        }
        Rc::new(ripples)
    }
}

const RIPPLE_MS: u32 = 600;

const RIPPLE_STYLE: &str = "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.6); \
    transform: scale(0); animation: ripple 600ms linear; pointer-events: none;";

#[derive(Properties, PartialEq)]
pub struct TechTagProps {
    pub label: &'static str,
}

/// How many of the oldest expiry timers have already fired.
pub fn fired_ripple_timers(pending: usize, live: usize) -> usize {
    pending.saturating_sub(live)
}

#[function_component(TechTag)]
pub fn tech_tag(props: &TechTagProps) -> Html {
    let ripples = use_reducer(Ripples::default);
    let timers = use_mut_ref(Vec::<Timeout>::new);

    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |live| {
                let mut timers = timers.borrow_mut();
                let fired = fired_ripple_timers(timers.len(), *live);
                timers.drain(..fired);
                || ()
            },
            ripples.live.len(),
        );
    }
    {
        let timers = timers.clone();
        use_effect_with_deps(move |_| move || timers.borrow_mut().clear(), ());
    }

    let on_enter = {
        let ripples = ripples.dispatcher();
        Callback::from(move |_: MouseEvent| {
            ripples.dispatch(RippleAction::Spawn);
            let expire = ripples.clone();
            timers
                .borrow_mut()
                .push(Timeout::new(RIPPLE_MS, move || expire.dispatch(RippleAction::Expire)));
        })
    };
    html! {
        <span class="tech-tag" style="position: relative;" onmouseenter={on_enter}>
            {props.label}
            { for ripples.live.iter().map(|id| html! {
                <span key={*id} class="tech-tag-ripple" style={RIPPLE_STYLE}></span>
            }) }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TechCategoryProps {
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

#[function_component(TechCategory)]
pub fn tech_category(props: &TechCategoryProps) -> Html {
    let node = use_node_ref();
    let classes = use_card_reveal(node.clone(), CardKind::TechCategory, false);
    html! {
        <div ref={node} class={classes}>
            <h3 class="tech-category__title">{props.title}</h3>
            <div class="tech-category__tags">
                { for props.tags.iter().map(|tag| html! { <TechTag label={*tag} /> }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogCardProps {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    #[prop_or_default]
    pub staggered: bool,
}

#[function_component(BlogCard)]
pub fn blog_card(props: &BlogCardProps) -> Html {
    let node = use_node_ref();
    let classes = use_card_reveal(node.clone(), CardKind::Blog, props.staggered);
    let pressed = use_state(|| false);

    let onclick = {
        let pressed = pressed.setter();
        let title = props.title;
        Callback::from(move |_: MouseEvent| {
            pressed.set(true);
            let pressed = pressed.clone();
            spawn_local(async move {
                TimeoutFuture::new(150).await;
                pressed.set(false);
            });
            info!("Navigate to blog post: {}", title);
        })
    };
    let style = if *pressed {
        format!("transform: scale(0.98); transition: all 150ms {};", EASE)
    } else {
        String::new()
    };

    html! {
        <article ref={node} class={classes} style={style} onclick={onclick}>
            <span class="blog-card__date">{props.date}</span>
            <h3 class="blog-card__title">{props.title}</h3>
            <p class="blog-card__excerpt">{props.excerpt}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_showcase_cards_tilt() {
        assert!(CardKind::Service.tilts());
        assert!(CardKind::Project.tilts());
        assert!(CardKind::Industry.tilts());
        assert!(!CardKind::Blog.tilts());
        assert!(!CardKind::ProcessStep.tilts());
    }

    #[test]
    fn card_classes_follow_reveal_progress() {
        assert_eq!(
            card_classes(CardKind::Blog, false, false).to_string(),
            "blog-card animate-element"
        );
        assert_eq!(
            card_classes(CardKind::Service, true, true).to_string(),
            "service-card animate-element animate-in loaded"
        );
    }

    #[test]
    fn hover_styles() {
        assert_eq!(Hover::default().card_style(), "");
        assert_eq!(Hover::default().icon_style(), "");

        let entered = Hover { inside: true, tilt: None };
        assert_eq!(entered.card_style(), "transition: all 600ms cubic-bezier(0.16, 1, 0.3, 1);");
        assert!(entered.icon_style().contains("400ms"));

        let tilted = Hover {
            inside: true,
            tilt: Some(Tilt::from_pointer(50.0, 50.0, 100.0, 100.0)),
        };
        assert!(tilted
            .card_style()
            .ends_with("transform: perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-8px);"));
    }

    #[test]
    fn tech_categories_wait_for_the_viewport() {
        assert!(!CardKind::TechCategory.joins_section_stagger());
        assert!(CardKind::Benefit.joins_section_stagger());
        assert!(CardKind::ProcessStep.joins_section_stagger());
    }

    #[test]
    fn expired_ripples_release_their_timers() {
        // Two ripples spawned, one expired: the oldest timer is spent
        assert_eq!(fired_ripple_timers(2, 1), 1);
        assert_eq!(fired_ripple_timers(3, 3), 0);
        // A spawn can land before the render that counts it
        assert_eq!(fired_ripple_timers(2, 3), 0);
    }

    #[test]
    fn ripples_expire_oldest_first() {
        let ripples = Rc::new(Ripples::default())
            .reduce(RippleAction::Spawn)
            .reduce(RippleAction::Spawn);
        assert_eq!(ripples.live, vec![0, 1]);

        let ripples = ripples.reduce(RippleAction::Expire);
        assert_eq!(ripples.live, vec![1]);

        let ripples = ripples.reduce(RippleAction::Expire).reduce(RippleAction::Expire);
        assert!(ripples.live.is_empty());
    }
}
