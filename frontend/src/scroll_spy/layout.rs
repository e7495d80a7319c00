use super::section::{FileRef, SectionId};

/// Vertical extent of a section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionGeometry {
    pub fn new(offset_top: f64, offset_height: f64) -> Self {
        Self { offset_top, offset_height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, position: f64) -> bool {
        self.offset_top <= position && position < self.offset_top + self.offset_height
    }
}

/// Read-only view of the live page layout. Every call reads fresh values.
pub trait LayoutProvider {
    fn scroll_y(&self) -> f64;

    fn section_geometry(&self, id: SectionId) -> Option<SectionGeometry>;

    /// Top edge of the section's element relative to the viewport.
    fn viewport_top(&self, id: SectionId) -> Option<f64>;

    fn header_height(&self) -> Option<f64>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ScrollDriver {
    fn smooth_scroll_to(&self, y: f64);
}

#[cfg_attr(test, mockall::automock)]
pub trait DownloadTrigger {
    fn trigger(&self, file: &FileRef);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_is_half_open() {
        let g = SectionGeometry::new(300.0, 500.0);
        assert!(!g.contains(299.9));
        assert!(g.contains(300.0));
        assert!(g.contains(799.0));
        assert!(!g.contains(800.0));
    }

    #[test]
    fn zero_height_contains_nothing() {
        let g = SectionGeometry::new(100.0, 0.0);
        assert!(!g.contains(100.0));
    }
}
