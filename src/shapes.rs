use crate::constants::*;
use crate::viewport::ViewportClass;

/// Presentation transform for one decorative element.
///
/// Applied in CSS order: translate, then rotate, then scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeTransform {
    pub translate_y: f64,
    pub rotation_deg: f64,
    pub scale: f64,
}

impl Default for ShapeTransform {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            rotation_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl ShapeTransform {
    /// CSS `transform` property value.
    pub fn css(&self) -> String {
        format!(
            "translateY({}px) rotate({}deg) scale({})",
            self.translate_y, self.rotation_deg, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Triangle,
    Hexagon,
    Lines,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Lines => "lines",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorTransforms {
    pub triangle: ShapeTransform,
    pub hexagon: ShapeTransform,
    pub lines: ShapeTransform,
}

impl DecorTransforms {
    pub fn each(&self) -> [(ShapeKind, ShapeTransform); 3] {
        [
            (ShapeKind::Triangle, self.triangle),
            (ShapeKind::Hexagon, self.hexagon),
            (ShapeKind::Lines, self.lines),
        ]
    }

    /// Apply every transform, returning the failures. One failing shape does
    /// not stop the others.
    pub fn apply_each<E, F>(&self, mut apply: F) -> Vec<(ShapeKind, E)>
    where
        F: FnMut(ShapeKind, &ShapeTransform) -> Result<(), E>,
    {
        self.each()
            .into_iter()
            .filter_map(|(kind, t)| apply(kind, &t).err().map(|e| (kind, e)))
            .collect()
    }
}

pub fn decor_transforms(progress: f64) -> DecorTransforms {
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    DecorTransforms {
        triangle: ShapeTransform {
            rotation_deg: p * TRIANGLE_ROTATION_DEG,
            scale: 1.0 + p * TRIANGLE_SCALE_GAIN,
            ..Default::default()
        },
        hexagon: ShapeTransform {
            rotation_deg: p * HEXAGON_ROTATION_DEG,
            scale: 1.0 + p * HEXAGON_SCALE_GAIN,
            ..Default::default()
        },
        lines: ShapeTransform {
            translate_y: p * LINES_TRAVEL_PX + LINES_OFFSET_PX,
            rotation_deg: p * LINES_ROTATION_DEG,
            scale: 1.0,
        },
    }
}

/// Pixel sizes for the decorative shapes at a given viewport class.
///
/// The triangle is drawn with CSS borders: two transparent side borders of
/// `triangle_half_base` and a coloured bottom border of `triangle_height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSizing {
    pub triangle_half_base: f64,
    pub triangle_height: f64,
    pub triangle_top: f64,
    pub triangle_left: f64,
    pub hexagon_size: f64,
    pub hexagon_border: f64,
    pub hexagon_bottom: f64,
    pub hexagon_right: f64,
}

impl ShapeSizing {
    pub fn for_class(class: ViewportClass) -> Self {
        match class {
            ViewportClass::Compact => Self {
                triangle_half_base: 30.0,
                triangle_height: 50.0,
                triangle_top: 40.0,
                triangle_left: 16.0,
                hexagon_size: 40.0,
                hexagon_border: 2.0,
                hexagon_bottom: 20.0,
                hexagon_right: 20.0,
            },
            ViewportClass::Regular => Self {
                triangle_half_base: 50.0,
                triangle_height: 80.0,
                triangle_top: 80.0,
                triangle_left: 40.0,
                hexagon_size: 80.0,
                hexagon_border: 3.0,
                hexagon_bottom: 80.0,
                hexagon_right: 40.0,
            },
        }
    }
}
