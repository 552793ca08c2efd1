use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

use super::reactor::{ScrollInput, ScrollReactor, SectionId};

/// Single source of truth for everything the scroll reactor decides.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    reactor: Rc<ScrollReactor>,
    pub scrolled: bool,
    pub parallax: Vec<f64>,
    pub revealed: BTreeSet<SectionId>,
    pub active: Option<SectionId>,
}

pub enum PageAction {
    /// A fresh measurement after a debounced scroll or resize.
    Measured(ScrollInput),
}

impl PageState {
    pub fn new(reactor: Rc<ScrollReactor>) -> Self {
        Self {
            reactor,
            scrolled: false,
            parallax: Vec::new(),
            revealed: BTreeSet::new(),
            active: None,
        }
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.iter().any(|section| section.as_str() == id)
    }

    pub fn parallax_at(&self, index: usize) -> f64 {
        self.parallax.get(index).copied().unwrap_or(0.0)
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PageAction::Measured(input) => {
                let frame = self.reactor.react(&input, self.active.as_ref());
                let newly_revealed = frame
                    .revealed
                    .iter()
                    .any(|id| !self.revealed.contains(id));

                let unchanged = !newly_revealed
                    && frame.scrolled == self.scrolled
                    && frame.parallax == self.parallax
                    && frame.active == self.active;
                if unchanged {
                    return self;
                }

                let mut revealed = self.revealed.clone();
                revealed.extend(frame.revealed);
                Rc::new(PageState {
                    reactor: self.reactor.clone(),
                    scrolled: frame.scrolled,
                    parallax: frame.parallax,
                    revealed,
                    active: frame.active,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::reactor::SectionGeometry;

    fn measure(scroll_y: f64) -> PageAction {
        PageAction::Measured(ScrollInput {
            scroll_y,
            viewport_height: 900.0,
            shape_count: 2,
            sections: vec![
                SectionGeometry::hero("home", 0.0, 800.0),
                SectionGeometry::new("services", 800.0, 600.0),
                SectionGeometry::new("contact", 1500.0, 600.0),
            ],
        })
    }

    fn initial() -> Rc<PageState> {
        Rc::new(PageState::new(Rc::new(ScrollReactor::default())))
    }

    #[test]
    fn reveals_accumulate_and_never_retract() {
        let state = initial().reduce(measure(800.0));
        assert!(state.is_revealed("services"));
        assert!(state.is_revealed("contact"));

        let state = state.reduce(measure(0.0));
        assert!(state.is_revealed("services"));
        assert!(!state.scrolled);
    }

    #[test]
    fn exactly_one_link_tracks_scroll() {
        let state = initial().reduce(measure(750.0));
        assert_eq!(state.active, Some("services".into()));

        let state = state.reduce(measure(1450.0));
        assert_eq!(state.active, Some("contact".into()));
    }

    #[test]
    fn gap_keeps_last_active_section() {
        // probe at 1450 falls between services and contact
        let state = initial().reduce(measure(700.0)).reduce(measure(1350.0));
        assert_eq!(state.active, Some("services".into()));
    }

    #[test]
    fn identical_measurement_keeps_same_state() {
        let state = initial().reduce(measure(300.0));
        let again = state.clone().reduce(measure(300.0));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn parallax_follows_offset() {
        let state = initial().reduce(measure(100.0));
        assert_eq!(state.parallax_at(0), -(100.0 * 0.3));
        assert_eq!(state.parallax_at(5), 0.0);
    }
}
