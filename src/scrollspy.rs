/// Scroll-spy: highlights the navigation link of the section currently in view.
///
/// Three inputs drive it:
///
/// 1. Intersection samples from an `IntersectionObserver` watching every
///    registered section.
/// 2. Scroll-position probes on scroll/resize/load, which also handle the
///    bottom of the page where no section can fill the viewport.
/// 3. Manual navigation (a nav link click). With a [`Suppression`] strategy
///    configured, automatic updates are ignored for a cool-down window so the
///    smooth-scroll animation does not flicker through intermediate sections.
///
/// The DOM side lives in `web::spy`; this module only sees section ids,
/// geometry numbers, timestamps and the [`NavLink`] capability.
use crate::timer::Cooldown;

/// A navigation entry the spy can highlight.
pub trait NavLink {
    /// Id of the section this link points at (`href="#id"` without the `#`).
    fn target(&self) -> &str;
    fn set_active(&mut self, active: bool);
}

/// How simultaneous intersection samples are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Each intersecting sample activates in turn; the last one wins.
    EventOrder,
    /// The sample with the greatest ratio wins; ties go to the lowest
    /// section index.
    GreatestRatio,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suppression {
    pub cooldown_ms: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpyConfig {
    /// Added to `scrollY` to get the probe point.
    pub probe_offset: f64,
    /// A section counts as reached when its top is within this distance
    /// below the probe.
    pub boundary_lookback: f64,
    /// Distance from the document bottom that triggers the last-section
    /// override.
    pub bottom_tolerance: f64,
    /// Fixed header height subtracted from smooth-scroll targets.
    pub header_offset: f64,
    pub thresholds: &'static [f64],
    pub root_margin: &'static str,
    pub resolution: Resolution,
    pub suppression: Option<Suppression>,
}

impl SpyConfig {
    /// Intersection plus scroll probing, no manual-navigation handling.
    pub fn simple() -> Self {
        Self {
            probe_offset: 200.0,
            boundary_lookback: 100.0,
            bottom_tolerance: 100.0,
            header_offset: 80.0,
            thresholds: &[0.1, 0.3, 0.5],
            root_margin: "-100px 0px -40% 0px",
            resolution: Resolution::EventOrder,
            suppression: None,
        }
    }

    /// Greatest-ratio resolution and a 1500 ms suppression window after
    /// each nav click.
    pub fn manual_aware() -> Self {
        Self {
            resolution: Resolution::GreatestRatio,
            suppression: Some(Suppression {
                cooldown_ms: 1500.0,
            }),
            ..Self::simple()
        }
    }
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self::manual_aware()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    pub section_id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Offset of one section's top edge, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub window_height: f64,
    pub document_height: f64,
}

/// Pick the section for a scroll position, or `None` when the probe is
/// above every section.
///
/// Near the document bottom the last section always wins. Otherwise the
/// winner is the section whose top is closest to and at or above the probe
/// (allowing `boundary_lookback` of look-ahead); ties go to the earlier
/// section.
pub fn select_by_position(
    config: &SpyConfig,
    viewport: Viewport,
    geometry: &[SectionGeometry],
) -> Option<usize> {
    if geometry.is_empty() {
        return None;
    }
    let probe = viewport.scroll_y + config.probe_offset;
    if probe + viewport.window_height >= viewport.document_height - config.bottom_tolerance {
        return Some(geometry.len() - 1);
    }

    let mut best: Option<(usize, f64)> = None;
    for (i, g) in geometry.iter().enumerate() {
        if g.top - config.boundary_lookback > probe {
            continue;
        }
        match best {
            Some((_, top)) if g.top <= top => {}
            _ => best = Some((i, g.top)),
        }
    }
    best.map(|(i, _)| i)
}

pub struct ScrollSpy<L: NavLink> {
    config: SpyConfig,
    sections: Vec<String>,
    links: Vec<L>,
    active: Option<usize>,
    cooldown: Cooldown,
}

impl<L: NavLink> ScrollSpy<L> {
    /// `sections` is the ordered registry of section ids discovered at
    /// start-up; it is not changed afterwards.
    pub fn new(config: SpyConfig, sections: Vec<String>, links: Vec<L>) -> Self {
        Self {
            config,
            sections,
            links,
            active: None,
            cooldown: Cooldown::new(),
        }
    }

    pub fn config(&self) -> &SpyConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn links(&self) -> &[L] {
        &self.links
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].as_str())
    }

    /// True while a manual navigation cool-down is running.
    pub fn is_suppressed(&self, now_ms: f64) -> bool {
        self.config.suppression.is_some() && self.cooldown.is_pending(now_ms)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s == id)
    }

    /// Mark section `idx` active and every other link inactive. Only the
    /// first link targeting the section is highlighted.
    fn activate(&mut self, idx: usize) -> bool {
        let changed = self.active != Some(idx);
        self.active = Some(idx);
        let id = &self.sections[idx];
        let mut lit = false;
        for link in self.links.iter_mut() {
            let on = !lit && link.target() == id;
            lit |= on;
            link.set_active(on);
        }
        changed
    }

    /// Handle one `IntersectionObserver` callback batch. Returns whether the
    /// active section changed.
    pub fn on_intersections(&mut self, samples: &[IntersectionSample], now_ms: f64) -> bool {
        if self.is_suppressed(now_ms) {
            return false;
        }
        let visible = samples
            .iter()
            .filter(|s| s.is_intersecting)
            .filter_map(|s| self.index_of(&s.section_id).map(|i| (i, s.ratio)));

        let winner = match self.config.resolution {
            Resolution::EventOrder => visible.last(),
            Resolution::GreatestRatio => visible.fold(None, |best, (i, r)| match best {
                Some((bi, br)) if r < br || (r == br && bi < i) => Some((bi, br)),
                _ => Some((i, r)),
            }),
        };
        match winner {
            Some((idx, _)) => self.activate(idx),
            None => false,
        }
    }

    /// Handle scroll/resize/load. `geometry` is parallel to the section
    /// registry. Returns whether the active section changed.
    pub fn on_scroll(&mut self, viewport: Viewport, geometry: &[SectionGeometry], now_ms: f64) -> bool {
        if self.is_suppressed(now_ms) {
            return false;
        }
        let len = geometry.len().min(self.sections.len());
        match select_by_position(&self.config, viewport, &geometry[..len]) {
            Some(idx) => self.activate(idx),
            None => false,
        }
    }

    /// A nav link for `section_id` was clicked. Activates it immediately,
    /// (re)starts the cool-down if configured, and returns the smooth-scroll
    /// target. Unknown ids return `None` and change nothing.
    pub fn navigate(&mut self, section_id: &str, section_top: f64, now_ms: f64) -> Option<f64> {
        let idx = self.index_of(section_id)?;
        self.activate(idx);
        if let Some(s) = self.config.suppression {
            self.cooldown.schedule(now_ms, s.cooldown_ms);
        }
        Some(section_top - self.config.header_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct FakeLink {
        target: String,
        active: bool,
    }

    impl NavLink for FakeLink {
        fn target(&self) -> &str {
            &self.target
        }
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    const IDS: [&str; 5] = ["about", "experience", "skills", "education", "contact"];

    fn spy(config: SpyConfig) -> ScrollSpy<FakeLink> {
        let sections = IDS.iter().map(|s| s.to_string()).collect();
        let links = IDS
            .iter()
            .map(|s| FakeLink {
                target: s.to_string(),
                active: false,
            })
            .collect();
        ScrollSpy::new(config, sections, links)
    }

    fn active_links(spy: &ScrollSpy<FakeLink>) -> Vec<&str> {
        spy.links()
            .iter()
            .filter(|l| l.active)
            .map(|l| l.target.as_str())
            .collect()
    }

    /// Five 800px sections starting at y=0, document 4000px tall.
    fn geometry() -> Vec<SectionGeometry> {
        (0..5)
            .map(|i| SectionGeometry { top: i as f64 * 800.0 })
            .collect()
    }

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            window_height: 900.0,
            document_height: 4000.0,
        }
    }

    fn sample(id: &str, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            section_id: id.to_string(),
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    // ── intersection mode ──────────────────────────────────────────

    #[test]
    fn simple_last_intersecting_sample_wins() {
        let mut s = spy(SpyConfig::simple());
        assert!(s.on_intersections(&[sample("skills", 0.5), sample("about", 0.1)], 0.0));
        assert_eq!(s.active_section(), Some("about"));
        assert_eq!(active_links(&s), vec!["about"]);
    }

    #[test]
    fn manual_aware_picks_greatest_ratio() {
        let mut s = spy(SpyConfig::manual_aware());
        s.on_intersections(
            &[sample("about", 0.1), sample("skills", 0.5), sample("education", 0.3)],
            0.0,
        );
        assert_eq!(s.active_section(), Some("skills"));
    }

    #[test]
    fn ratio_tie_goes_to_lowest_section_index() {
        let mut s = spy(SpyConfig::manual_aware());
        s.on_intersections(&[sample("education", 0.3), sample("experience", 0.3)], 0.0);
        assert_eq!(s.active_section(), Some("experience"));
    }

    #[test]
    fn non_intersecting_and_unknown_samples_ignored() {
        let mut s = spy(SpyConfig::manual_aware());
        assert!(!s.on_intersections(&[sample("skills", 0.0), sample("blog", 0.9)], 0.0));
        assert_eq!(s.active_section(), None);
        assert!(active_links(&s).is_empty());
    }

    // ── scroll-position mode ───────────────────────────────────────

    #[test]
    fn probe_selects_last_section_scrolled_past() {
        let mut s = spy(SpyConfig::simple());
        // probe = 1000 + 200 = 1200 → experience (top 800) is the closest reached top
        s.on_scroll(viewport(1000.0), &geometry(), 0.0);
        assert_eq!(s.active_section(), Some("experience"));
    }

    #[test]
    fn lookback_reaches_section_just_below_probe() {
        let mut s = spy(SpyConfig::simple());
        // probe = 1420 + 200 = 1620; skills top 1600 is within reach
        s.on_scroll(viewport(1420.0), &geometry(), 0.0);
        assert_eq!(s.active_section(), Some("skills"));
        // probe = 1290 + 200 = 1490; 1600 - 100 = 1500 > 1490 → not yet
        s.on_scroll(viewport(1290.0), &geometry(), 0.0);
        assert_eq!(s.active_section(), Some("experience"));
    }

    #[test]
    fn probe_above_every_section_changes_nothing() {
        let mut s = spy(SpyConfig::simple());
        let geo: Vec<SectionGeometry> = geometry()
            .into_iter()
            .map(|g| SectionGeometry { top: g.top + 600.0 })
            .collect();
        assert!(!s.on_scroll(viewport(0.0), &geo, 0.0));
        assert_eq!(s.active_section(), None);
    }

    #[test]
    fn bottom_of_page_forces_last_section() {
        let mut s = spy(SpyConfig::simple());
        // probe 2800+200=3000, +900 = 3900 >= 4000-100
        s.on_scroll(viewport(2800.0), &geometry(), 0.0);
        assert_eq!(s.active_section(), Some("contact"));
    }

    #[test]
    fn bottom_override_ignores_geometry() {
        let mut s = spy(SpyConfig::simple());
        // Contact starts far below the probe, but the page bottom is reached.
        let geo = vec![
            SectionGeometry { top: 0.0 },
            SectionGeometry { top: 3000.0 },
            SectionGeometry { top: 3010.0 },
            SectionGeometry { top: 3020.0 },
            SectionGeometry { top: 9000.0 },
        ];
        s.on_scroll(viewport(3100.0), &geo, 0.0);
        assert_eq!(s.active_section(), Some("contact"));
    }

    #[test]
    fn short_geometry_slice_is_tolerated() {
        let mut s = spy(SpyConfig::simple());
        s.on_scroll(viewport(0.0), &geometry()[..2], 0.0);
        assert_eq!(s.active_section(), Some("about"));
        assert!(!s.on_scroll(viewport(0.0), &[], 0.0));
    }

    // ── manual navigation ──────────────────────────────────────────

    #[test]
    fn click_activates_immediately_and_returns_offset_target() {
        let mut s = spy(SpyConfig::manual_aware());
        let target = s.navigate("education", 2400.0, 0.0);
        assert_eq!(target, Some(2320.0));
        assert_eq!(active_links(&s), vec!["education"]);
    }

    #[test]
    fn automatic_updates_suppressed_during_cooldown() {
        let mut s = spy(SpyConfig::manual_aware());
        s.navigate("contact", 3200.0, 1000.0);

        // Smooth scroll passes through "skills" on the way down.
        assert!(!s.on_scroll(viewport(1500.0), &geometry(), 1200.0));
        assert!(!s.on_intersections(&[sample("skills", 0.5)], 2499.0));
        assert_eq!(s.active_section(), Some("contact"));
        assert!(s.is_suppressed(2499.0));

        // Window over: automatic tracking resumes.
        assert!(s.on_scroll(viewport(1500.0), &geometry(), 2500.0));
        assert_eq!(s.active_section(), Some("skills"));
    }

    #[test]
    fn new_click_restarts_cooldown() {
        let mut s = spy(SpyConfig::manual_aware());
        s.navigate("skills", 1600.0, 0.0);
        s.navigate("education", 2400.0, 1000.0);
        // 1600ms after the first click, still inside the second window
        assert!(!s.on_scroll(viewport(0.0), &geometry(), 1600.0));
        assert_eq!(s.active_section(), Some("education"));
        assert!(s.on_scroll(viewport(0.0), &geometry(), 2500.0));
        assert_eq!(s.active_section(), Some("about"));
    }

    #[test]
    fn simple_config_never_suppresses() {
        let mut s = spy(SpyConfig::simple());
        s.navigate("contact", 3200.0, 0.0);
        assert!(!s.is_suppressed(1.0));
        s.on_scroll(viewport(0.0), &geometry(), 1.0);
        assert_eq!(s.active_section(), Some("about"));
    }

    #[test]
    fn unknown_target_is_ignored() {
        let mut s = spy(SpyConfig::manual_aware());
        assert_eq!(s.navigate("blog", 0.0, 0.0), None);
        assert!(!s.is_suppressed(1.0));
        assert_eq!(s.active_section(), None);
    }

    #[test]
    fn duplicate_links_only_first_lit() {
        let links = vec![
            FakeLink { target: "about".into(), active: false },
            FakeLink { target: "about".into(), active: false },
        ];
        let mut s = ScrollSpy::new(SpyConfig::simple(), vec!["about".into()], links);
        s.navigate("about", 0.0, 0.0);
        assert_eq!(active_links(&s).len(), 1);
    }

    #[test]
    fn activating_same_section_reports_no_change() {
        let mut s = spy(SpyConfig::simple());
        assert!(s.on_scroll(viewport(1000.0), &geometry(), 0.0));
        assert!(!s.on_scroll(viewport(1010.0), &geometry(), 0.0));
    }
}
