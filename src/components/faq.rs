use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::section::Section;
use crate::dom;
use crate::hooks::{use_escape, use_intersection, ANIMATE_IN};

/// Which FAQ item, if any, is expanded. Only one can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Accordion { open: None }
        } else {
            Accordion { open: Some(index) }
        }
    }

    pub fn close_all(self) -> Self {
        Accordion { open: None }
    }
}

const QUESTIONS: [(&str, &str); 5] = [
    (
        "How quickly can you start supporting us?",
        "Most clients are onboarded within two weeks. Urgent projects can begin with an emergency assessment in as little as 48 hours.",
    ),
    (
        "Do you replace our internal IT team?",
        "Not unless you want us to. We often work alongside in-house staff, taking on monitoring, security and after-hours support.",
    ),
    (
        "What does a managed services plan include?",
        "Helpdesk, patching, backup monitoring, security tooling and a quarterly strategy review, all for a fixed monthly price per user.",
    ),
    (
        "Can you help with compliance audits?",
        "Yes. We prepare documentation and controls for HIPAA, SOC 2 and PCI DSS, and can join your auditor calls.",
    ),
    (
        "Are there long-term contracts?",
        "Plans run month to month after an initial 90-day onboarding period.",
    ),
];

/// Delay before an opened answer is scrolled into view, letting it expand first.
const SCROLL_AFTER_OPEN_MS: u32 = 300;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let node = use_node_ref();
    let in_view = use_intersection(node.clone(), ANIMATE_IN, true);

    {
        let reveal_answer = {
            let node = node.clone();
            use_timeout(
                move || {
                    if let Some(item) = node.cast::<Element>() {
                        dom::scroll_into_view(&item);
                    }
                },
                SCROLL_AFTER_OPEN_MS,
            )
        };
        use_effect_with_deps(
            move |open| {
                if *open {
                    reveal_answer.reset();
                } else {
                    reveal_answer.cancel();
                }
                || ()
            },
            props.open,
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div
            ref={node}
            data-faq="true"
            class={classes!(
                "faq-item",
                "animate-element",
                in_view.then(|| "animate-in"),
                props.open.then(|| "faq-item--active")
            )}
        >
            <button class="faq-item__question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span>{props.question}</span>
                <span class="faq-item__icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-item__answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub visible: bool,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);

    {
        let accordion = accordion.clone();
        use_escape(Callback::from(move |_| accordion.set(accordion.close_all())));
    }

    html! {
        <Section id="faq" title="Frequently Asked Questions" visible={props.visible}>
            <div class="faq__list">
                { for QUESTIONS.iter().enumerate().map(|(index, &(question, answer))| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_| accordion.set(accordion.toggle(index)))
                    };
                    html! {
                        <FaqItem
                            question={question}
                            answer={answer}
                            open={accordion.is_open(index)}
                            on_toggle={on_toggle}
                        />
                    }
                }) }
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let accordion = Accordion::default().toggle(1);
        assert!(accordion.is_open(1));

        let accordion = accordion.toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let accordion = Accordion::default().toggle(2).toggle(2);
        assert_eq!(accordion, Accordion::default());
    }

    #[test]
    fn escape_closes_everything() {
        let accordion = Accordion::default().toggle(0).close_all();
        assert!((0..QUESTIONS.len()).all(|index| !accordion.is_open(index)));
    }
}
