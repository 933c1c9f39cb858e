use crate::grid::{StrokeStyle, Surface};
use crate::scroll::{ScrollMetrics, Section, SectionBounds};
use crate::shapes::{ShapeSizing, ShapeTransform};
use wasm_bindgen::JsCast;
use web_sys as web;

// Element ids the page is expected to provide
pub const CANVAS_ID: &str = "grid-canvas";
pub const SCROLL_ROOT_ID: &str = "scroll-root";
pub const TRIANGLE_ID: &str = "shape-triangle";
pub const HEXAGON_ID: &str = "shape-hexagon";
pub const LINES_ID: &str = "shape-lines";

pub const NAV_ACTIVE_CLASS: &str = "active";

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn required_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Window inner width in CSS pixels, 0 when unavailable.
#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Match the canvas pixel size to the window's inner size. Clears the canvas.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement, window: &web::Window) {
    let w = viewport_width(window);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(w.max(1.0) as u32);
    canvas.set_height(h.max(1.0) as u32);
}

pub fn scroll_metrics(el: &web::Element) -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: el.scroll_top() as f64,
        scroll_height: el.scroll_height() as f64,
        client_height: el.client_height() as f64,
    }
}

/// Bounds of the sections present in the document, in document order.
pub fn section_bounds(document: &web::Document) -> Vec<(Section, SectionBounds)> {
    Section::ALL
        .iter()
        .filter_map(|s| {
            let rect = document.get_element_by_id(s.id())?.get_bounding_client_rect();
            Some((
                *s,
                SectionBounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                },
            ))
        })
        .collect()
}

/// Mark nav anchors pointing at `active` and clear the others.
pub fn highlight_nav(document: &web::Document, active: Section) {
    for s in Section::ALL {
        let selector = format!("a[href=\"#{}\"]", s.id());
        let Ok(nodes) = document.query_selector_all(&selector) else {
            continue;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                _ = el
                    .class_list()
                    .toggle_with_force(NAV_ACTIVE_CLASS, s == active);
            }
        }
    }
}

pub fn apply_transform(el: &web::HtmlElement, t: &ShapeTransform) -> anyhow::Result<()> {
    el.style()
        .set_property("transform", &t.css())
        .map_err(|e| anyhow::anyhow!("set transform: {:?}", e))
}

fn set_px(style: &web::CssStyleDeclaration, prop: &str, px: f64) {
    _ = style.set_property(prop, &format!("{}px", px));
}

pub fn apply_triangle_sizing(el: &web::HtmlElement, s: &ShapeSizing) {
    let style = el.style();
    set_px(&style, "border-left-width", s.triangle_half_base);
    set_px(&style, "border-right-width", s.triangle_half_base);
    set_px(&style, "border-bottom-width", s.triangle_height);
    set_px(&style, "top", s.triangle_top);
    set_px(&style, "left", s.triangle_left);
}

pub fn apply_hexagon_sizing(el: &web::HtmlElement, s: &ShapeSizing) {
    let style = el.style();
    set_px(&style, "width", s.hexagon_size);
    set_px(&style, "height", s.hexagon_size);
    set_px(&style, "border-width", s.hexagon_border);
    set_px(&style, "bottom", s.hexagon_bottom);
    set_px(&style, "right", s.hexagon_right);
}

/// `Surface` backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, radians: f64) {
        _ = self.ctx.rotate(radians);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        _ = self.ctx.scale(sx, sy);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&style.css_color());
        self.ctx.set_line_width(style.width);
        self.ctx.stroke_rect(x, y, w, h);
    }
}
