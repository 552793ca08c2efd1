//! Maps a scroll offset onto header, parallax, reveal and active-section state.
//!
//! Everything here is a pure function of the numbers handed in; the DOM side
//! (`hooks::use_scroll_reactor`) measures the page and applies the result.

use std::fmt;

use serde::Deserialize;

/// The `id` attribute of a page `<section>`, used as the nav link anchor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        SectionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The in-page link that targets this section.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }

    /// Parses `#services` style hrefs. A bare `#` targets nothing.
    pub fn from_href(href: &str) -> Option<Self> {
        match href.strip_prefix('#') {
            Some(id) if !id.is_empty() => Some(SectionId::new(id)),
            _ => None,
        }
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        SectionId::new(id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Layout of one section as measured from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
    /// The hero is never revealed; it is on screen from the start.
    pub is_hero: bool,
}

impl SectionGeometry {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: SectionId::new(id),
            top,
            height,
            is_hero: false,
        }
    }

    pub fn hero(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            is_hero: true,
            ..Self::new(id, top, height)
        }
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// What happens to the active link while the probe sits between sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPolicy {
    /// Keep the last matched section active. Above the first section the
    /// active link is still cleared.
    Retain,
    /// Clear the active link whenever nothing matches.
    Clear,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReactorConfig {
    pub scrolled_threshold: f64,
    pub parallax_step: f64,
    pub reveal_margin: f64,
    pub active_probe: f64,
    pub gap_policy: GapPolicy,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            parallax_step: 0.3,
            reveal_margin: 100.0,
            active_probe: 100.0,
            gap_policy: GapPolicy::Retain,
        }
    }
}

/// One measurement of the page, taken after a debounced scroll or resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollInput {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub shape_count: usize,
    pub sections: Vec<SectionGeometry>,
}

/// Presentation state derived from a single [`ScrollInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    pub scrolled: bool,
    pub parallax: Vec<f64>,
    pub revealed: Vec<SectionId>,
    pub active: Option<SectionId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollReactor {
    config: ReactorConfig,
}

impl Default for ScrollReactor {
    fn default() -> Self {
        Self::new(ReactorConfig::default())
    }
}

impl ScrollReactor {
    pub fn new(config: ReactorConfig) -> Self {
        Self { config }
    }

    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.config.scrolled_threshold
    }

    /// Vertical translation for hero shape `index`; deeper shapes move faster.
    pub fn parallax_offset(&self, index: usize, scroll_y: f64) -> f64 {
        let speed = (index + 1) as f64 * self.config.parallax_step;
        -(scroll_y * speed)
    }

    pub fn is_revealed(&self, section: &SectionGeometry, scroll_y: f64, viewport_height: f64) -> bool {
        !section.is_hero && scroll_y + viewport_height > section.top + self.config.reveal_margin
    }

    /// The last section in document order whose extent holds the probe line.
    pub fn section_at<'a>(&self, sections: &'a [SectionGeometry], scroll_y: f64) -> Option<&'a SectionGeometry> {
        let probe = scroll_y + self.config.active_probe;
        sections.iter().rev().find(|section| section.contains(probe))
    }

    pub fn active_section(
        &self,
        sections: &[SectionGeometry],
        scroll_y: f64,
        previous: Option<&SectionId>,
    ) -> Option<SectionId> {
        if let Some(section) = self.section_at(sections, scroll_y) {
            return Some(section.id.clone());
        }
        let probe = scroll_y + self.config.active_probe;
        let above_all = sections.iter().all(|section| probe < section.top);
        match self.config.gap_policy {
            GapPolicy::Retain if !above_all => previous.cloned(),
            _ => None,
        }
    }

    pub fn react(&self, input: &ScrollInput, previous_active: Option<&SectionId>) -> ScrollFrame {
        let parallax = (0..input.shape_count)
            .map(|index| self.parallax_offset(index, input.scroll_y))
            .collect();
        let revealed = input
            .sections
            .iter()
            .filter(|section| self.is_revealed(section, input.scroll_y, input.viewport_height))
            .map(|section| section.id.clone())
            .collect();

        ScrollFrame {
            scrolled: self.is_scrolled(input.scroll_y),
            parallax,
            revealed,
            active: self.active_section(&input.sections, input.scroll_y, previous_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionGeometry> {
        vec![
            SectionGeometry::hero("home", 0.0, 800.0),
            SectionGeometry::new("services", 800.0, 600.0),
            SectionGeometry::new("process", 1400.0, 500.0),
            // gap between 1900 and 2000
            SectionGeometry::new("contact", 2000.0, 700.0),
        ]
    }

    fn input(scroll_y: f64) -> ScrollInput {
        ScrollInput {
            scroll_y,
            viewport_height: 900.0,
            shape_count: 3,
            sections: page(),
        }
    }

    #[test]
    fn scrolled_iff_past_threshold() {
        let reactor = ScrollReactor::default();
        for offset in [0.0, 10.0, 49.0, 50.0] {
            assert!(!reactor.is_scrolled(offset), "offset {}", offset);
        }
        for offset in [50.5, 51.0, 400.0, 10_000.0] {
            assert!(reactor.is_scrolled(offset), "offset {}", offset);
        }
    }

    #[test]
    fn parallax_is_linear_in_offset_and_index() {
        let reactor = ScrollReactor::default();
        for offset in [0.0, 1.0, 123.0, 987.5] {
            for index in 0..4 {
                let expected = -(offset * ((index + 1) as f64 * 0.3));
                assert_eq!(reactor.parallax_offset(index, offset), expected);
            }
        }
        let frame = reactor.react(&input(100.0), None);
        assert_eq!(frame.parallax.len(), 3);
        assert_eq!(frame.parallax[1], -(100.0 * (2.0 * 0.3)));
    }

    #[test]
    fn sections_reveal_within_margin_of_viewport_bottom() {
        let reactor = ScrollReactor::default();
        let frame = reactor.react(&input(0.0), None);
        // 0 + 900 > 800 + 100 is false
        assert!(frame.revealed.is_empty());

        let frame = reactor.react(&input(1.0), None);
        assert_eq!(frame.revealed, vec![SectionId::from("services")]);

        let frame = reactor.react(&input(1300.0), None);
        assert_eq!(
            frame.revealed,
            vec![SectionId::from("services"), SectionId::from("process"), SectionId::from("contact")]
        );
    }

    #[test]
    fn hero_is_never_revealed() {
        let reactor = ScrollReactor::default();
        let frame = reactor.react(&input(5000.0), None);
        assert!(!frame.revealed.contains(&SectionId::from("home")));
    }

    #[test]
    fn active_section_uses_probe_line() {
        let reactor = ScrollReactor::default();
        assert_eq!(reactor.react(&input(0.0), None).active, Some("home".into()));
        // probe at 800 is the first pixel of services
        assert_eq!(reactor.react(&input(700.0), None).active, Some("services".into()));
        assert_eq!(reactor.react(&input(699.0), None).active, Some("home".into()));
        assert_eq!(reactor.react(&input(1350.0), None).active, Some("process".into()));
    }

    #[test]
    fn at_most_one_section_is_active() {
        let reactor = ScrollReactor::default();
        let sections = page();
        let mut offset = 0.0;
        while offset < 3000.0 {
            let hits = sections
                .iter()
                .filter(|section| section.contains(offset + 100.0))
                .count();
            assert!(hits <= 1);
            let active = reactor.active_section(&sections, offset, None);
            assert_eq!(active.is_some(), hits == 1);
            offset += 37.0;
        }
    }

    #[test]
    fn later_section_wins_on_overlap() {
        let reactor = ScrollReactor::default();
        let sections = vec![
            SectionGeometry::new("a", 0.0, 500.0),
            SectionGeometry::new("b", 300.0, 500.0),
        ];
        assert_eq!(reactor.active_section(&sections, 250.0, None), Some("b".into()));
    }

    #[test]
    fn gap_retains_previous_by_default() {
        let reactor = ScrollReactor::default();
        let previous = SectionId::from("process");
        // probe at 1950 sits in the gap
        let frame = reactor.react(&input(1850.0), Some(&previous));
        assert_eq!(frame.active, Some(previous));
    }

    #[test]
    fn gap_clears_with_clear_policy() {
        let reactor = ScrollReactor::new(ReactorConfig {
            gap_policy: GapPolicy::Clear,
            ..Default::default()
        });
        let previous = SectionId::from("process");
        let frame = reactor.react(&input(1850.0), Some(&previous));
        assert_eq!(frame.active, None);
    }

    #[test]
    fn above_every_section_clears_active() {
        let reactor = ScrollReactor::default();
        let sections = vec![SectionGeometry::new("services", 600.0, 400.0)];
        let previous = SectionId::from("services");
        assert_eq!(reactor.active_section(&sections, 0.0, Some(&previous)), None);
    }

    #[test]
    fn section_id_hrefs() {
        assert_eq!(SectionId::from("faq").href(), "#faq");
        assert_eq!(SectionId::from_href("#faq"), Some("faq".into()));
        assert_eq!(SectionId::from_href("#"), None);
        assert_eq!(SectionId::from_href("/blog"), None);
    }
}
