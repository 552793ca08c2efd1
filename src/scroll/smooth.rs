use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::animator::{destination_for, AnimationStep, ScrollAnimation};
use super::reactor::SectionId;
use crate::components::header::HEADER_ID;
use crate::config::SiteConfig;
use crate::dom;
use crate::error::SiteError;
use crate::schedule::Generation;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drives eased window scrolls on animation frames. Starting a new scroll
/// retires the one in flight.
pub struct SmoothScroller {
    generation: Rc<Generation>,
    duration_ms: f64,
    header_gap: f64,
}

impl SmoothScroller {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            generation: Rc::new(Generation::new()),
            duration_ms: config.scroll_duration_ms,
            header_gap: config.header_gap,
        }
    }

    pub fn scroll_to_section(&self, id: &SectionId) -> Result<(), SiteError> {
        let target: HtmlElement = dom::element_by_id(id.as_str())?;
        let header_height = dom::element_by_id::<HtmlElement>(HEADER_ID)
            .map(|header| header.offset_height() as f64)
            .unwrap_or(0.0);
        let start = dom::scroll_y()?;
        let destination = destination_for(target.offset_top() as f64, header_height, self.header_gap);
        debug!("Scrolling to #{} ({} -> {})", id, start, destination);
        self.run(ScrollAnimation::new(start, destination, self.duration_ms))
    }

    fn run(&self, mut animation: ScrollAnimation) -> Result<(), SiteError> {
        let window = dom::window()?;
        let ticket = self.generation.advance();
        let generation = self.generation.clone();

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let next_frame = frame.clone();
        let frame_window = window.clone();

        *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !generation.is_current(ticket) {
                // superseded by a newer scroll
                next_frame.borrow_mut().take();
                return;
            }
            match animation.step(timestamp) {
                AnimationStep::InFlight(position) => {
                    frame_window.scroll_to_with_x_and_y(0.0, position);
                    let scheduled = schedule_frame(&*next_frame, |callback| {
                        frame_window.request_animation_frame(callback.as_ref().unchecked_ref())
                    });
                    if let Err(e) = scheduled {
                        warn!("Smooth scroll stopped: {}", SiteError::from(e));
                    }
                }
                AnimationStep::Finished(position) => {
                    frame_window.scroll_to_with_x_and_y(0.0, position);
                    next_frame.borrow_mut().take();
                }
            }
        }) as Box<dyn FnMut(f64)>));

        schedule_frame(&*frame, |callback| window.request_animation_frame(callback.as_ref().unchecked_ref()))?;
        Ok(())
    }
}

/// Passes the callback held in `slot` to `schedule`. When scheduling fails
/// the slot is emptied, since the callback owns a handle to its own slot.
fn schedule_frame<T, R, E>(slot: &RefCell<Option<T>>, schedule: impl FnOnce(&T) -> Result<R, E>) -> Result<(), E> {
    let scheduled = match slot.borrow().as_ref() {
        Some(callback) => schedule(callback).map(drop),
        None => Ok(()),
    };
    if scheduled.is_err() {
        slot.borrow_mut().take();
    }
    scheduled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_request_releases_the_frame() {
        let slot = RefCell::new(Some(7_u8));
        let result = schedule_frame(&slot, |_| Err::<i32, &str>("no frames"));
        assert_eq!(result, Err("no frames"));
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn scheduled_frame_stays_in_place() {
        let slot = RefCell::new(Some(7_u8));
        let mut seen = None;
        let result = schedule_frame(&slot, |callback| {
            seen = Some(*callback);
            Ok::<i32, &str>(1)
        });
        assert_eq!(result, Ok(()));
        assert_eq!(seen, Some(7));
        assert_eq!(*slot.borrow(), Some(7));
    }

    #[test]
    fn empty_slot_schedules_nothing() {
        let slot: RefCell<Option<u8>> = RefCell::new(None);
        let result = schedule_frame(&slot, |_| Err::<i32, &str>("unreachable"));
        assert_eq!(result, Ok(()));
    }
}
