use crate::constants::*;
use crate::viewport::ViewportClass;
use glam::{DAffine2, DVec2};
use std::f64::consts::TAU;

/// Stroke parameters for one rectangle outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub rgb: [u8; 3],
    pub alpha: f64,
    pub width: f64,
}

impl StrokeStyle {
    /// CSS colour string, e.g. `rgba(55,65,81,0.195)`.
    pub fn css_color(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }
}

/// 2D drawing capability the grid is painted onto.
///
/// Mirrors the subset of a canvas 2D context the renderer needs. Transform
/// calls compose with the current transform; `save`/`restore` push and pop it.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn scale(&mut self, sx: f64, sy: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &StrokeStyle);
}

/// Grid layout for one paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridConfig {
    pub fn new(width: u32, height: u32, class: ViewportClass) -> Self {
        let (rows, cols) = class.grid_dims();
        let cell_height = height as f64 / rows as f64;
        // cells are never taller than wide
        let cell_width = (width as f64 / cols as f64).max(cell_height);
        Self {
            rows,
            cols,
            cell_width,
            cell_height,
        }
    }

    /// Top-left corner of cell (row, col).
    #[inline]
    pub fn origin(&self, row: usize, col: usize) -> DVec2 {
        DVec2::new(col as f64 * self.cell_width, row as f64 * self.cell_height)
    }

    #[inline]
    pub fn center(&self, row: usize, col: usize) -> DVec2 {
        self.origin(row, col) + DVec2::new(self.cell_width * 0.5, self.cell_height * 0.5)
    }
}

/// Per-cell visual parameters for a given progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellVisual {
    pub phase_delay: f64,
    pub intensity: f64,
    pub scale: f64,
    pub opacity: f64,
    pub stroke_width: f64,
    pub rotation: f64,
}

impl CellVisual {
    pub fn at(row: usize, col: usize, progress: f64) -> Self {
        let progress = clamp_progress(progress);
        let phase_delay = (row + col) as f64 * PHASE_DELAY_PER_STEP;
        let intensity = (progress * TAU + phase_delay).sin() * 0.5 + 0.5;
        let stroke_width = if intensity > STROKE_THICK_THRESHOLD {
            STROKE_THICK
        } else {
            STROKE_THIN
        };
        Self {
            phase_delay,
            intensity,
            scale: SCALE_BASE + intensity * SCALE_SPAN,
            opacity: OPACITY_BASE + intensity * OPACITY_SPAN,
            stroke_width,
            rotation: grid_rotation(progress),
        }
    }

    /// Affine applied to the cell rectangle: rotation and scale pivot on `center`.
    pub fn transform(&self, center: DVec2) -> DAffine2 {
        DAffine2::from_translation(center)
            * DAffine2::from_angle(self.rotation)
            * DAffine2::from_scale(DVec2::splat(self.scale))
            * DAffine2::from_translation(-center)
    }

    #[inline]
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle {
            rgb: GRID_STROKE_RGB,
            alpha: self.opacity,
            width: self.stroke_width,
        }
    }
}

/// Global grid rotation in radians.
#[inline]
pub fn grid_rotation(progress: f64) -> f64 {
    (clamp_progress(progress) * GRID_MAX_ROTATION_DEG).to_radians()
}

#[inline]
fn clamp_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Clear `surface` and paint the full grid for `progress`.
pub fn render_grid<S: Surface + ?Sized>(
    surface: &mut S,
    progress: f64,
    width: u32,
    height: u32,
    class: ViewportClass,
) {
    surface.clear(width as f64, height as f64);
    if width == 0 || height == 0 {
        return;
    }
    let grid = GridConfig::new(width, height, class);
    for i in 0..grid.rows {
        for j in 0..grid.cols {
            let cell = CellVisual::at(i, j, progress);
            let origin = grid.origin(i, j);
            let c = grid.center(i, j);

            surface.save();
            surface.translate(c.x, c.y);
            surface.rotate(cell.rotation);
            surface.scale(cell.scale, cell.scale);
            surface.translate(-c.x, -c.y);
            surface.stroke_rect(
                origin.x,
                origin.y,
                grid.cell_width,
                grid.cell_height,
                &cell.stroke(),
            );
            surface.restore();
        }
    }
}
