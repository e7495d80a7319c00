use super::layout::LayoutProvider;

/// Last known height of the sticky site header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderHeightTracker {
    height: f64,
}

impl HeaderHeightTracker {
    pub fn new(default_height: f64) -> Self {
        Self { height: default_height }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Re-reads the header height. A missing header keeps the previous value.
    pub fn measure<L: LayoutProvider + ?Sized>(&mut self, layout: &L) -> f64 {
        if let Some(height) = layout.header_height() {
            if height.is_finite() && height >= 0.0 {
                self.height = height;
            }
        }
        self.height
    }
}
