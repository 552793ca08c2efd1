use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Math;
use log::{info, warn};
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::{self, IntersectionWatch};
use crate::schedule::Stagger;
use crate::scroll::debounce::DebouncedTimer;
use crate::scroll::page_state::{PageAction, PageState};

const FADE_IN_DELAY_MS: u32 = 100;
const KEYBOARD_NAV_CLASS: &str = "keyboard-nav";

/// Runs `on_escape` whenever Escape is pressed anywhere on the page.
#[hook]
pub fn use_escape(on_escape: Callback<()>) {
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            on_escape.emit(());
        }
    });
}

struct ScrollFeed {
    apply: Rc<dyn Fn(f64)>,
    on_scroll: DebouncedTimer<f64>,
    on_resize: DebouncedTimer<f64>,
}

/// Feeds debounced scroll and resize measurements into the page reducer.
#[hook]
pub fn use_scroll_reactor(
    page: UseReducerDispatcher<PageState>,
    shape_count: usize,
    scroll_debounce_ms: u32,
    resize_debounce_ms: u32,
) {
    let deps = (shape_count, scroll_debounce_ms, resize_debounce_ms);
    let feed = use_memo(
        move |&(shape_count, scroll_ms, resize_ms)| {
            let apply: Rc<dyn Fn(f64)> = Rc::new(move |scroll_y: f64| {
                match dom::measure(scroll_y, shape_count) {
                    Ok(input) => page.dispatch(PageAction::Measured(input)),
                    Err(e) => warn!("Skipping scroll update: {}", e),
                }
            });
            ScrollFeed {
                on_scroll: DebouncedTimer::new(scroll_ms, {
                    let apply = apply.clone();
                    move |scroll_y| apply(scroll_y)
                }),
                on_resize: DebouncedTimer::new(resize_ms, {
                    let apply = apply.clone();
                    move |scroll_y| apply(scroll_y)
                }),
                apply,
            }
        },
        deps,
    );

    {
        let feed = feed.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Ok(scroll_y) = dom::scroll_y() {
                feed.on_scroll.trigger(scroll_y);
            }
        });
    }
    {
        let feed = feed.clone();
        use_event_with_window("resize", move |_: Event| {
            if let Ok(scroll_y) = dom::scroll_y() {
                feed.on_resize.trigger(scroll_y);
            }
        });
    }

    // Initial check
    use_effect_with_deps(
        move |_| {
            match dom::scroll_y() {
                Ok(scroll_y) => (feed.apply)(scroll_y),
                Err(e) => warn!("Scroll effects disabled: {}", e),
            }
            || ()
        },
        deps,
    );
}

/// Whether a stagger run still has items waiting to appear.
pub fn stagger_pending(shown: usize, count: usize, armed: bool) -> bool {
    armed && shown < count
}

/// Number of items shown so far by a staggered reveal. The run starts once
/// `armed` turns true; the pending step is cancelled on unmount.
#[hook]
pub fn use_stagger(count: usize, stagger: Stagger, armed: bool) -> usize {
    let shown = use_state(|| 0usize);
    let gap = stagger.gap(*shown);
    let next = {
        let shown = shown.clone();
        use_timeout(move || shown.set(*shown + 1), gap)
    };

    use_effect_with_deps(
        move |&(shown, count, armed)| {
            if stagger_pending(shown, count, armed) {
                next.reset();
            } else {
                next.cancel();
            }
            || ()
        },
        (*shown, count, armed),
    );
    *shown
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    /// Upper bound of a random delay applied after the element appears.
    pub max_delay_ms: f64,
}

/// Reveal-on-scroll for cards: 10% visible, bottom edge pulled up 50px.
pub const ANIMATE_IN: ObserveOptions = ObserveOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
    max_delay_ms: 200.0,
};

/// Marks content as loaded shortly before it scrolls into view.
pub const LAZY_LOAD: ObserveOptions = ObserveOptions {
    threshold: 0.0,
    root_margin: "50px",
    max_delay_ms: 0.0,
};

/// Latches true once `node` has intersected the viewport.
#[hook]
pub fn use_intersection(node: NodeRef, options: ObserveOptions, enabled: bool) -> bool {
    let seen = use_state(|| false);
    {
        let seen = seen.setter();
        use_effect_with_deps(
            move |(node, options, enabled)| {
                let options = *options;
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let watch = node.cast::<Element>().filter(|_| *enabled).and_then(|element| {
                    let pending = pending.clone();
                    let on_enter = move || {
                        let delay = (Math::random() * options.max_delay_ms) as u32;
                        if delay == 0 {
                            seen.set(true);
                        } else {
                            let seen = seen.clone();
                            pending.replace(Some(Timeout::new(delay, move || seen.set(true))));
                        }
                    };
                    IntersectionWatch::once(&element, options.threshold, options.root_margin, on_enter)
                        .map_err(|e| warn!("Reveal observer unavailable: {}", e))
                        .ok()
                });
                move || {
                    drop(watch);
                    pending.borrow_mut().take();
                }
            },
            (node, options, enabled),
        );
    }
    *seen
}

pub fn document_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

fn style_body(property: &str, value: &str) {
    if let Err(e) = dom::body().and_then(|body| dom::set_style(&body, property, value)) {
        warn!("Could not set body {}: {}", property, e);
    }
}

fn mark_keyboard_nav(on: bool) {
    if let Err(e) = dom::body().and_then(|body| dom::toggle_class(&body, KEYBOARD_NAV_CLASS, on)) {
        warn!("Could not update {} marker: {}", KEYBOARD_NAV_CLASS, e);
    }
}

fn log_load_time() {
    info!("HALO IT Services website loaded in {}ms", dom::now().round());
}

/// Page-wide touches that live outside any component: body fade-in, the
/// keyboard navigation marker and the load-time log line.
#[hook]
pub fn use_page_chrome() {
    let _fade_in = use_timeout(
        || {
            style_body("opacity", "1");
            style_body("transition", "opacity 800ms cubic-bezier(0.16, 1, 0.3, 1)");
        },
        FADE_IN_DELAY_MS,
    );

    use_effect_with_deps(
        |_| {
            style_body("opacity", "0");
            match dom::document() {
                Ok(document) if document_loaded(&document.ready_state()) => log_load_time(),
                Ok(_) => {}
                Err(e) => warn!("Load timing unavailable: {}", e),
            }
            || ()
        },
        (),
    );

    use_event_with_window("load", |_: Event| log_load_time());
    use_event_with_window("keydown", |e: KeyboardEvent| {
        if e.key() == "Tab" {
            mark_keyboard_nav(true);
        }
    });
    use_event_with_window("mousedown", |_: MouseEvent| mark_keyboard_nav(false));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_complete_document_counts_as_loaded() {
        assert!(document_loaded("complete"));
        assert!(!document_loaded("interactive"));
        assert!(!document_loaded("loading"));
    }

    #[test]
    fn stagger_waits_until_armed_and_stops_at_count() {
        assert!(!stagger_pending(0, 4, false));
        assert!(stagger_pending(0, 4, true));
        assert!(stagger_pending(3, 4, true));
        assert!(!stagger_pending(4, 4, true));
    }

    #[test]
    fn lazy_load_fires_before_reveal() {
        assert_eq!(LAZY_LOAD.max_delay_ms, 0.0);
        assert!(ANIMATE_IN.threshold > LAZY_LOAD.threshold);
    }
}
