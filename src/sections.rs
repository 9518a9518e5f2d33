use std::{fmt, str::FromStr};

use thiserror::Error;

/// Pixels added to the raw scroll offset before it is compared against
/// section bounds, so a section turns active once its heading has moved a
/// little past the top of the viewport.
pub const SCROLL_BIAS: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Skills,
    Experience,
    Education,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    /// Every section in document order, top to bottom.
    pub const ALL: [SectionId; 6] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Contact,
    ];

    /// Sections that get a label in the navigation bar.
    pub const NAV: [SectionId; 5] = [
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Contact,
    ];

    /// The element id used as the in-page anchor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Contact => "Contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical placement of a rendered section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionGeometry {
    pub fn new(offset_top: f64, offset_height: f64) -> Self {
        Self {
            offset_top,
            offset_height,
        }
    }

    pub fn offset_bottom(&self) -> f64 {
        self.offset_top + self.offset_height
    }

    /// Half-open: the top edge belongs to the section, the bottom edge does not.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_bottom()
    }
}

/// Source of section geometry. The browser reads it from layout; tests feed
/// fixed numbers.
pub trait SectionLayout {
    /// `None` when the section is not rendered (yet).
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry>;
}

impl<F> SectionLayout for F
where
    F: Fn(SectionId) -> Option<SectionGeometry>,
{
    fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        self(id)
    }
}

/// First section, in document order, whose bounds contain the biased scroll
/// position. Sections missing from the layout are skipped.
pub fn locate_section(scroll_y: f64, layout: &impl SectionLayout) -> Option<SectionId> {
    let position = scroll_y + SCROLL_BIAS;
    SectionId::ALL.into_iter().find(|&id| {
        layout
            .geometry(id)
            .is_some_and(|geometry| geometry.contains(position))
    })
}

/// Remembers which section the navigation should highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Recomputes the active section. When nothing matches the previous
    /// section stays active. Returns the section active after the update.
    pub fn update(&mut self, scroll_y: f64, layout: &impl SectionLayout) -> SectionId {
        if let Some(id) = locate_section(scroll_y, layout) {
            self.active = id;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    // Six stacked sections, each 800px tall, starting at 0.
    fn stacked_layout() -> HashMap<SectionId, SectionGeometry> {
        SectionId::ALL
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id, SectionGeometry::new(i as f64 * 800.0, 800.0)))
            .collect()
    }

    fn layout_of(
        map: &HashMap<SectionId, SectionGeometry>,
    ) -> impl Fn(SectionId) -> Option<SectionGeometry> + '_ {
        move |id| map.get(&id).copied()
    }

    #[test]
    fn test_bias_selects_next_section() {
        let map = HashMap::from([
            (SectionId::Hero, SectionGeometry::new(0.0, 800.0)),
            (SectionId::About, SectionGeometry::new(800.0, 800.0)),
        ]);
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.update(750.0, &layout_of(&map)), SectionId::About);
        assert_eq!(tracker.update(699.0, &layout_of(&map)), SectionId::Hero);
        // exactly on the boundary belongs to the lower section
        assert_eq!(tracker.update(700.0, &layout_of(&map)), SectionId::About);
    }

    #[test]
    fn test_starts_at_hero() {
        assert_eq!(ActiveSectionTracker::new().active(), SectionId::Hero);
    }

    #[test]
    fn test_each_section_selected_inside_its_interval() {
        let map = stacked_layout();
        let layout = layout_of(&map);
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            let top = i as f64 * 800.0;
            for probe in [top, top + 1.0, top + 400.0, top + 799.0] {
                let mut tracker = ActiveSectionTracker::new();
                let scroll_y = probe - SCROLL_BIAS;
                assert_eq!(
                    tracker.update(scroll_y, &layout),
                    id,
                    "biased position {probe} should select {id}"
                );
            }
        }
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let map = stacked_layout();
        let layout = layout_of(&map);
        let mut tracker = ActiveSectionTracker::new();
        tracker.update(2000.0, &layout);
        assert_eq!(tracker.active(), SectionId::Skills);

        // past the end of the document
        assert_eq!(tracker.update(10_000.0, &layout), SectionId::Skills);
        // negative overscroll (rubber-banding) puts the position above hero
        assert_eq!(tracker.update(-500.0, &layout), SectionId::Skills);
        // repeating the no-match update changes nothing
        assert_eq!(tracker.update(10_000.0, &layout), SectionId::Skills);
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut map = stacked_layout();
        map.remove(&SectionId::About);
        let layout = layout_of(&map);
        let mut tracker = ActiveSectionTracker::new();

        // inside where about would be: nothing matches, hero stays
        assert_eq!(tracker.update(900.0, &layout), SectionId::Hero);
        // later sections still resolve
        assert_eq!(tracker.update(1700.0, &layout), SectionId::Skills);
    }

    #[test]
    fn test_nothing_rendered() {
        let empty = |_: SectionId| -> Option<SectionGeometry> { None };
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(locate_section(0.0, &empty), None);
        assert_eq!(tracker.update(1234.0, &empty), SectionId::Hero);
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let map = HashMap::from([
            (SectionId::Hero, SectionGeometry::new(0.0, 1000.0)),
            (SectionId::About, SectionGeometry::new(500.0, 1000.0)),
        ]);
        assert_eq!(
            locate_section(600.0, &layout_of(&map)),
            Some(SectionId::Hero)
        );
    }

    #[test]
    fn test_zero_height_section_never_matches() {
        let map = HashMap::from([
            (SectionId::Hero, SectionGeometry::new(0.0, 800.0)),
            (SectionId::About, SectionGeometry::new(800.0, 0.0)),
            (SectionId::Skills, SectionGeometry::new(800.0, 800.0)),
        ]);
        assert_eq!(
            locate_section(700.0, &layout_of(&map)),
            Some(SectionId::Skills)
        );
    }

    #[test]
    fn test_navigate_then_scroll_round_trip() {
        // smooth navigation aligns the section top with the viewport top,
        // so the settled scroll offset equals the section's offset_top
        let map = stacked_layout();
        let layout = layout_of(&map);
        let mut tracker = ActiveSectionTracker::new();
        for id in SectionId::NAV {
            let target = map[&id];
            assert_eq!(tracker.update(target.offset_top, &layout), id);
        }
    }

    #[test]
    fn test_parse_section_ids() {
        assert_eq!("about".parse::<SectionId>(), Ok(SectionId::About));
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert_eq!("Experience".parse::<SectionId>(), Ok(SectionId::Experience));
        assert_eq!(
            "projects".parse::<SectionId>(),
            Err(UnknownSection("projects".to_string()))
        );
        for id in SectionId::ALL {
            assert_eq!(id.to_string().parse::<SectionId>(), Ok(id));
            assert_eq!(id.href().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn test_parse_rejects_blank_fragment() {
        assert_eq!("#".parse::<SectionId>(), Err(UnknownSection(String::new())));
        assert_eq!(
            "#about-me".parse::<SectionId>(),
            Err(UnknownSection("about-me".to_string()))
        );
    }

    #[test]
    fn test_nav_excludes_hero() {
        assert!(!SectionId::NAV.contains(&SectionId::Hero));
        assert_eq!(SectionId::About.href(), "#about");
        assert_eq!(SectionId::Education.label(), "Education");
    }
}
