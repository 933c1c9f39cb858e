use crate::constants::{COMPACT_MAX_WIDTH_PX, GRID_COMPACT, GRID_REGULAR};

/// Coarse device-size bucket driving grid density and shape sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewportClass {
    Compact,
    #[default]
    Regular,
}

impl ViewportClass {
    /// Classify a viewport by its CSS width in pixels.
    #[inline]
    pub fn from_width(width_px: f64) -> Self {
        if width_px < COMPACT_MAX_WIDTH_PX {
            ViewportClass::Compact
        } else {
            ViewportClass::Regular
        }
    }

    /// Grid dimensions as (rows, cols).
    #[inline]
    pub fn grid_dims(self) -> (usize, usize) {
        match self {
            ViewportClass::Compact => GRID_COMPACT,
            ViewportClass::Regular => GRID_REGULAR,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewportClass::Compact => "compact",
            ViewportClass::Regular => "regular",
        }
    }
}
