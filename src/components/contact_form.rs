use web_sys::{Element, Event, FocusEvent, InputEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::section::Section;
use crate::dom;
use crate::form::{ContactForm, FieldKind, FieldSpec, FormAction, FormMessage, MessageKind, SubmitPhase};

/// Fade-out time between a banner starting to leave and its removal.
const MESSAGE_EXIT_MS: u32 = 400;
const FOCUS_PULSE_MS: u32 = 300;
const EASE: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

const SERVICE_OPTIONS: [(&str, &str); 5] = [
    ("cloud", "Cloud & Infrastructure"),
    ("security", "Cybersecurity"),
    ("strategy", "IT Strategy"),
    ("support", "Managed Support"),
    ("other", "Something else"),
];

const CONTACT_DETAILS: [(&str, &str, &str); 3] = [
    ("📍", "Visit", "120 Harbour Street, Suite 400"),
    ("📞", "Call", "+1 (555) 014-2290"),
    ("✉️", "Email", "hello@haloit.services"),
];

/// Id of the banner currently shown, when it reports a successful send.
pub fn success_id(message: Option<&FormMessage>) -> Option<u32> {
    message
        .filter(|message| message.kind == MessageKind::Success)
        .map(|message| message.id)
}

/// When a success banner starts fading out and when it is removed.
pub fn banner_timings(dismiss_ms: u32) -> (u32, u32) {
    (dismiss_ms, dismiss_ms.saturating_add(MESSAGE_EXIT_MS))
}

pub fn control_style(pulsing: bool) -> String {
    let transform = if pulsing { "transform: scale(1.01); " } else { "" };
    format!("{}transition: transform {}ms {};", transform, FOCUS_PULSE_MS, EASE)
}

pub fn submit_style(phase: SubmitPhase) -> String {
    let transform = match phase {
        SubmitPhase::Sending => "transform: scale(0.95); ",
        SubmitPhase::Idle => "",
    };
    format!("{}transition: all 300ms {};", transform, EASE)
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub visible: bool,
    pub submit_delay_ms: u32,
    pub success_dismiss_ms: u32,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_reducer(ContactForm::default);
    let pulse = use_state(|| None::<usize>);
    let message_ref = use_node_ref();

    // Simulated send
    {
        let send = {
            let dispatcher = form.dispatcher();
            use_timeout(move || dispatcher.dispatch(FormAction::Complete), props.submit_delay_ms)
        };
        use_effect_with_deps(
            move |(phase, _)| {
                if *phase == SubmitPhase::Sending {
                    send.reset();
                } else {
                    send.cancel();
                }
                || ()
            },
            (form.phase, props.submit_delay_ms),
        );
    }

    // A fresh success banner is scrolled to, then fades out on its own
    {
        let success = success_id(form.message.as_ref());
        let (leave_ms, remove_ms) = banner_timings(props.success_dismiss_ms);
        let leave = {
            let dispatcher = form.dispatcher();
            use_timeout(
                move || {
                    if let Some(id) = success {
                        dispatcher.dispatch(FormAction::StartDismiss(id));
                    }
                },
                leave_ms,
            )
        };
        let remove = {
            let dispatcher = form.dispatcher();
            use_timeout(
                move || {
                    if let Some(id) = success {
                        dispatcher.dispatch(FormAction::Dismiss(id));
                    }
                },
                remove_ms,
            )
        };
        let message_ref = message_ref.clone();
        use_effect_with_deps(
            move |(success, _)| {
                if success.is_some() {
                    if let Some(banner) = message_ref.cast::<Element>() {
                        dom::scroll_into_view(&banner);
                    }
                    leave.reset();
                    remove.reset();
                } else {
                    leave.cancel();
                    remove.cancel();
                }
                || ()
            },
            (success, props.success_dismiss_ms),
        );
    }

    {
        let pulse_end = {
            let pulse = pulse.setter();
            use_timeout(move || pulse.set(None), FOCUS_PULSE_MS)
        };
        use_effect_with_deps(
            move |current| {
                if current.is_some() {
                    pulse_end.reset();
                } else {
                    pulse_end.cancel();
                }
                || ()
            },
            *pulse,
        );
    }

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let field = |index: usize, spec: &FieldSpec| {
        let state = &form.fields[index];
        let control_id = format!("contact-{}", spec.name);
        let class = classes!("form-control", state.error.map(|_| "form-control--error"));
        let style = control_style(*pulse == Some(index));

        let oninput = {
            let dispatcher = form.dispatcher();
            Callback::from(move |e: InputEvent| dispatcher.dispatch(FormAction::Input(index, dom::event_value(&e))))
        };
        let onchange = {
            let dispatcher = form.dispatcher();
            Callback::from(move |e: Event| dispatcher.dispatch(FormAction::Input(index, dom::event_value(&e))))
        };
        let onblur = {
            let dispatcher = form.dispatcher();
            Callback::from(move |_: FocusEvent| dispatcher.dispatch(FormAction::Blur(index)))
        };
        let onfocus = {
            let pulse = pulse.setter();
            Callback::from(move |_: FocusEvent| pulse.set(Some(index)))
        };

        let control = match spec.kind {
            FieldKind::Select => html! {
                <select
                    id={control_id.clone()}
                    name={spec.name}
                    class={class}
                    style={style}
                    required={spec.required}
                    onchange={onchange}
                    onblur={onblur}
                    onfocus={onfocus}
                >
                    <option value="" selected={state.value.is_empty()}>{"Select a service"}</option>
                    { for SERVICE_OPTIONS.iter().map(|&(value, label)| html! {
                        <option value={value} selected={state.value == value}>{label}</option>
                    }) }
                </select>
            },
            FieldKind::TextArea => html! {
                <textarea
                    id={control_id.clone()}
                    name={spec.name}
                    class={class}
                    style={style}
                    rows="5"
                    required={spec.required}
                    value={state.value.clone()}
                    oninput={oninput}
                    onblur={onblur}
                    onfocus={onfocus}
                />
            },
            kind => {
                let input_type = match kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    _ => "text",
                };
                html! {
                    <input
                        type={input_type}
                        id={control_id.clone()}
                        name={spec.name}
                        class={class}
                        style={style}
                        required={spec.required}
                        value={state.value.clone()}
                        oninput={oninput}
                        onblur={onblur}
                        onfocus={onfocus}
                    />
                }
            }
        };

        html! {
            <div class="form-group">
                <label class="form-label" for={control_id}>
                    {spec.label}{if spec.required { " *" } else { "" }}
                </label>
                { control }
                { for state.error.map(|error| html! { <div class="field-error">{error.to_string()}</div> }) }
            </div>
        }
    };

    let sending = form.phase == SubmitPhase::Sending;

    html! {
        <Section id="contact" title="Get in Touch" subtitle={Some("Tell us what you need and we'll plan the next step together")} visible={props.visible}>
            <div class="contact__grid">
                <div class="contact__info">
                    { for CONTACT_DETAILS.iter().map(|&(icon, label, value)| html! {
                        <div class="contact__item">
                            <span class="contact__icon">{icon}</span>
                            <div>
                                <h4>{label}</h4>
                                <p>{value}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <form id="contactForm" class="contact__form" novalidate={true} onsubmit={onsubmit}>
                    { for form.message.as_ref().map(|message| html! {
                        <div
                            ref={message_ref.clone()}
                            class={classes!(
                                "form-message",
                                message.kind.class(),
                                message.leaving.then(|| "form-message--leaving")
                            )}
                        >
                            {message.text.clone()}
                        </div>
                    }) }
                    { for form.specs().iter().enumerate().map(|(index, spec)| field(index, spec)) }
                    <button
                        type="submit"
                        class="btn btn--primary btn--full-width"
                        disabled={sending}
                        style={submit_style(form.phase)}
                    >
                        {form.submit_label()}
                    </button>
                </form>
            </div>
        </Section>
    }
}
