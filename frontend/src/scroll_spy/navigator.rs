use log::{debug, info};
use thiserror::Error;

use super::header::HeaderHeightTracker;
use super::layout::{DownloadTrigger, LayoutProvider, ScrollDriver};
use super::section::{FileRef, NavItem, SectionId, SectionList};
use crate::config::ScrollSpyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Default header height, first section active, no event seen yet.
    Initialized,
    Tracking,
    /// Torn down; events no longer touch state.
    Unmounted,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkipReason {
    #[error("section `{0}` is not declared on this page")]
    UnknownSection(SectionId),
    #[error("no element rendered for section `{0}` yet")]
    MissingElement(SectionId),
    #[error("navigator is unmounted")]
    Unmounted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Scrolled { section: SectionId, target_y: f64 },
    Downloaded(FileRef),
    Skipped(SkipReason),
}

/// Tracks which declared section is in view and scrolls to sections on
/// request. One instance per mounted page.
#[derive(Debug, Clone)]
pub struct ScrollSpyNavigator {
    sections: SectionList,
    active: SectionId,
    header: HeaderHeightTracker,
    config: ScrollSpyConfig,
    phase: Phase,
}

impl ScrollSpyNavigator {
    pub fn new(sections: SectionList, config: ScrollSpyConfig) -> Self {
        Self {
            active: sections.first(),
            header: HeaderHeightTracker::new(config.default_header_height),
            sections,
            config,
            phase: Phase::Initialized,
        }
    }

    pub fn active_section(&self) -> SectionId {
        self.active
    }

    pub fn header_height(&self) -> f64 {
        self.header.height()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &ScrollSpyConfig {
        &self.config
    }

    /// Mount-time setup: reads the header height only. Detection waits for
    /// the first scroll or resize so a stale offset from the previous page
    /// cannot pick the active section.
    pub fn measure_header<L: LayoutProvider + ?Sized>(&mut self, layout: &L) -> f64 {
        if self.phase == Phase::Unmounted {
            return self.header.height();
        }
        self.header.measure(layout)
    }

    /// Handles a scroll or resize event: re-measures the header, then
    /// re-detects the active section. Returns true when the active section
    /// changed.
    pub fn on_layout_event<L: LayoutProvider + ?Sized>(&mut self, layout: &L) -> bool {
        if self.phase == Phase::Unmounted {
            return false;
        }
        self.phase = Phase::Tracking;
        self.header.measure(layout);
        self.detect_active_section(layout)
    }

    pub fn detect_active_section<L: LayoutProvider + ?Sized>(&mut self, layout: &L) -> bool {
        if self.phase == Phase::Unmounted {
            return false;
        }

        let position = layout.scroll_y() + self.header.height() + self.config.detection_margin;
        let hit = self.sections.iter().map(|s| s.id).find(|&id| {
            layout
                .section_geometry(id)
                .map_or(false, |geometry| geometry.contains(position))
        });

        match hit {
            Some(id) if id != self.active => {
                debug!("active section {} -> {} at {}px", self.active, id, position);
                self.active = id;
                true
            }
            _ => false,
        }
    }

    pub fn navigate_to<L, S, D>(
        &mut self,
        item: &NavItem,
        layout: &L,
        scroller: &S,
        downloader: &D,
    ) -> Navigation
    where
        L: LayoutProvider + ?Sized,
        S: ScrollDriver + ?Sized,
        D: DownloadTrigger + ?Sized,
    {
        if self.phase == Phase::Unmounted {
            return Navigation::Skipped(SkipReason::Unmounted);
        }

        let id = match item {
            NavItem::DownloadAction(file) => {
                info!("downloading {}", file.path);
                downloader.trigger(file);
                return Navigation::Downloaded(file.clone());
            }
            NavItem::ScrollTarget(id) => *id,
        };

        if !self.sections.contains(id) {
            return Navigation::Skipped(SkipReason::UnknownSection(id));
        }
        let Some(viewport_top) = layout.viewport_top(id) else {
            return Navigation::Skipped(SkipReason::MissingElement(id));
        };

        let target_y = viewport_top + layout.scroll_y()
            - (self.header.height() + self.config.navigation_margin);
        scroller.smooth_scroll_to(target_y);
        // Highlight right away; the scroll may take a while or go nowhere.
        self.active = id;

        Navigation::Scrolled { section: id, target_y }
    }

    pub fn unmount(&mut self) {
        self.phase = Phase::Unmounted;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::scroll_spy::layout::{MockDownloadTrigger, MockScrollDriver, SectionGeometry};
    use crate::scroll_spy::section::Section;
    use mockall::predicate::eq;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct FakeLayout {
        pub scroll_y: f64,
        pub header: Option<f64>,
        pub sections: HashMap<SectionId, SectionGeometry>,
    }

    impl FakeLayout {
        pub(crate) fn with(mut self, id: SectionId, top: f64, height: f64) -> Self {
            self.sections.insert(id, SectionGeometry::new(top, height));
            self
        }

        pub(crate) fn scrolled_to(mut self, y: f64) -> Self {
            self.scroll_y = y;
            self
        }
    }

    impl LayoutProvider for FakeLayout {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn section_geometry(&self, id: SectionId) -> Option<SectionGeometry> {
            self.sections.get(&id).copied()
        }

        fn viewport_top(&self, id: SectionId) -> Option<f64> {
            self.sections.get(&id).map(|g| g.offset_top - self.scroll_y)
        }

        fn header_height(&self) -> Option<f64> {
            self.header
        }
    }

    // Default header (72) + detection margin (100).
    const LEAD: f64 = 172.0;

    pub(crate) fn two_sections() -> ScrollSpyNavigator {
        let sections = SectionList::new(vec![
            Section::new(SectionId::Concept, "Concept"),
            Section::new(SectionId::Features, "Features"),
        ])
        .unwrap();
        ScrollSpyNavigator::new(sections, ScrollSpyConfig::default())
    }

    fn quiet_mocks() -> (MockScrollDriver, MockDownloadTrigger) {
        let mut scroller = MockScrollDriver::new();
        scroller.expect_smooth_scroll_to().never();
        let mut downloader = MockDownloadTrigger::new();
        downloader.expect_trigger().never();
        (scroller, downloader)
    }

    #[test]
    fn first_section_is_active_before_any_event() {
        let nav = two_sections();
        assert_eq!(nav.active_section(), SectionId::Concept);
        assert_eq!(nav.phase(), Phase::Initialized);
        assert_eq!(nav.header_height(), 72.0);
    }

    #[test]
    fn scan_picks_section_containing_position() {
        let mut nav = two_sections();
        let base = FakeLayout::default()
            .with(SectionId::Concept, 0.0, 300.0)
            .with(SectionId::Features, 300.0, 500.0);

        let layout = base.scrolled_to(301.0 - LEAD);
        assert!(nav.detect_active_section(&layout));
        assert_eq!(nav.active_section(), SectionId::Features);

        let layout = layout.scrolled_to(250.0 - LEAD);
        assert!(nav.detect_active_section(&layout));
        assert_eq!(nav.active_section(), SectionId::Concept);
    }

    #[test]
    fn overlapping_sections_resolve_to_earlier_declared() {
        let mut nav = two_sections();
        let layout = FakeLayout::default()
            .with(SectionId::Concept, 0.0, 600.0)
            .with(SectionId::Features, 300.0, 500.0)
            .scrolled_to(400.0 - LEAD);

        nav.detect_active_section(&layout);
        assert_eq!(nav.active_section(), SectionId::Concept);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut nav = two_sections();
        let layout = FakeLayout::default()
            .with(SectionId::Concept, 400.0, 300.0)
            .with(SectionId::Features, 700.0, 500.0)
            .scrolled_to(800.0 - LEAD);
        nav.detect_active_section(&layout);
        assert_eq!(nav.active_section(), SectionId::Features);

        // Above the first section.
        let above = layout.scrolled_to(-LEAD - 50.0);
        assert!(!nav.detect_active_section(&above));
        assert_eq!(nav.active_section(), SectionId::Features);

        // Past the last one.
        let below = above.scrolled_to(5000.0);
        assert!(!nav.detect_active_section(&below));
        assert_eq!(nav.active_section(), SectionId::Features);
    }

    #[test]
    fn zero_height_and_missing_sections_are_skipped() {
        let mut nav = two_sections();
        let layout = FakeLayout::default()
            .with(SectionId::Concept, 500.0, 0.0)
            .scrolled_to(500.0 - LEAD);
        assert!(!nav.detect_active_section(&layout));
        assert_eq!(nav.active_section(), SectionId::Concept);
    }

    #[test]
    fn detection_uses_measured_header_height() {
        let mut nav = two_sections();
        let mut layout = FakeLayout::default()
            .with(SectionId::Concept, 0.0, 300.0)
            .with(SectionId::Features, 300.0, 500.0)
            .scrolled_to(150.0);
        // 150 + 72 + 100 = 322 with the default header.
        layout.header = Some(20.0);
        // 150 + 20 + 100 = 270 once measured.
        assert!(!nav.on_layout_event(&layout));
        assert_eq!(nav.active_section(), SectionId::Concept);
        assert_eq!(nav.phase(), Phase::Tracking);
    }

    #[test]
    fn missing_header_falls_back_to_default() {
        let mut nav = two_sections();
        let layout = FakeLayout::default()
            .with(SectionId::Concept, 0.0, 300.0)
            .with(SectionId::Features, 300.0, 500.0)
            .scrolled_to(130.0);
        assert!(nav.on_layout_event(&layout));
        assert_eq!(nav.header_height(), 72.0);
        assert_eq!(nav.active_section(), SectionId::Features);
    }

    #[test]
    fn mount_measures_header_without_detecting() {
        let sections = SectionList::new(vec![
            Section::new(SectionId::Concept, "Concept"),
            Section::new(SectionId::Features, "Features"),
            Section::new(SectionId::Specs, "Specs"),
        ])
        .unwrap();
        let mut nav = ScrollSpyNavigator::new(sections, ScrollSpyConfig::default());
        let mut layout = FakeLayout::default()
            .with(SectionId::Concept, 800.0, 1000.0)
            .with(SectionId::Features, 1800.0, 1000.0)
            .with(SectionId::Specs, 2800.0, 1000.0)
            .scrolled_to(3000.0);
        layout.header = Some(64.0);

        // Still at the previous page's offset when the new page mounts.
        assert_eq!(nav.measure_header(&layout), 64.0);
        assert_eq!(nav.active_section(), SectionId::Concept);
        assert_eq!(nav.phase(), Phase::Initialized);

        // Then the page jumps to the top, into the hero.
        let layout = layout.scrolled_to(0.0);
        assert!(!nav.on_layout_event(&layout));
        assert_eq!(nav.active_section(), SectionId::Concept);
    }

    #[test]
    fn navigate_scrolls_below_header_and_highlights_immediately() {
        let mut nav = two_sections();
        let layout = FakeLayout::default()
            .with(SectionId::Concept, 0.0, 1000.0)
            .with(SectionId::Features, 1000.0, 500.0)
            .scrolled_to(200.0);

        let mut scroller = MockScrollDriver::new();
        scroller
            .expect_smooth_scroll_to()
            .with(eq(848.0))
            .times(1)
            .return_const(());
        let mut downloader = MockDownloadTrigger::new();
        downloader.expect_trigger().never();

        let outcome = nav.navigate_to(
            &NavItem::ScrollTarget(SectionId::Features),
            &layout,
            &scroller,
            &downloader,
        );
        assert_eq!(
            outcome,
            Navigation::Scrolled { section: SectionId::Features, target_y: 848.0 }
        );
        assert_eq!(nav.active_section(), SectionId::Features);
    }

    #[test]
    fn navigating_to_active_section_is_harmless() {
        let mut nav = two_sections();
        let layout = FakeLayout::default()
            .with(SectionId::Concept, 0.0, 1000.0)
            .with(SectionId::Features, 1000.0, 500.0);
        let mut scroller = MockScrollDriver::new();
        scroller.expect_smooth_scroll_to().times(2).return_const(());
        let mut downloader = MockDownloadTrigger::new();
        downloader.expect_trigger().never();

        let item = NavItem::ScrollTarget(SectionId::Features);
        let first = nav.navigate_to(&item, &layout, &scroller, &downloader);
        let second = nav.navigate_to(&item, &layout, &scroller, &downloader);
        assert_eq!(first, second);
        assert_eq!(nav.active_section(), SectionId::Features);
    }

    #[test]
    fn download_items_never_scroll_or_change_highlight() {
        let mut nav = two_sections();
        let layout = FakeLayout::default().with(SectionId::Concept, 0.0, 1000.0);
        let file = FileRef::new("manuals/nimbus-8.pdf");

        let mut scroller = MockScrollDriver::new();
        scroller.expect_smooth_scroll_to().never();
        let mut downloader = MockDownloadTrigger::new();
        downloader
            .expect_trigger()
            .withf(|f| f.path == "manuals/nimbus-8.pdf")
            .times(1)
            .return_const(());

        let outcome = nav.navigate_to(
            &NavItem::DownloadAction(file.clone()),
            &layout,
            &scroller,
            &downloader,
        );
        assert_eq!(outcome, Navigation::Downloaded(file));
        assert_eq!(nav.active_section(), SectionId::Concept);
    }

    #[test]
    fn undeclared_or_unrendered_targets_are_skipped() {
        let mut nav = two_sections();
        let layout = FakeLayout::default().with(SectionId::Concept, 0.0, 1000.0);
        let (scroller, downloader) = quiet_mocks();

        let outcome = nav.navigate_to(
            &NavItem::ScrollTarget(SectionId::Faq),
            &layout,
            &scroller,
            &downloader,
        );
        assert_eq!(outcome, Navigation::Skipped(SkipReason::UnknownSection(SectionId::Faq)));

        let outcome = nav.navigate_to(
            &NavItem::ScrollTarget(SectionId::Features),
            &layout,
            &scroller,
            &downloader,
        );
        assert_eq!(
            outcome,
            Navigation::Skipped(SkipReason::MissingElement(SectionId::Features))
        );
        assert_eq!(nav.active_section(), SectionId::Concept);
    }

    #[test]
    fn unmounted_navigator_ignores_everything() {
        let mut nav = two_sections();
        nav.unmount();
        let layout = FakeLayout::default()
            .with(SectionId::Features, 0.0, 1000.0)
            .scrolled_to(10.0);
        let (scroller, downloader) = quiet_mocks();

        assert!(!nav.on_layout_event(&layout));
        let outcome = nav.navigate_to(
            &NavItem::DownloadAction(FileRef::new("a.pdf")),
            &layout,
            &scroller,
            &downloader,
        );
        assert_eq!(outcome, Navigation::Skipped(SkipReason::Unmounted));
        assert_eq!(nav.active_section(), SectionId::Concept);
        assert_eq!(nav.phase(), Phase::Unmounted);
    }
}
