use crate::dom;
use crate::grid::render_grid;
use crate::scroll::{FrameScheduler, ScrollTracker, Section};
use crate::shapes::{decor_transforms, ShapeKind, ShapeSizing};
use crate::viewport::ViewportClass;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `FrameScheduler` backed by `requestAnimationFrame`.
///
/// The callback lives in a shared slot so it can be installed after the
/// tracker that owns this scheduler has been created.
pub struct RafScheduler {
    window: web::Window,
    slot: FrameSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            slot: Rc::new(RefCell::new(None)),
        }
    }

    fn slot(&self) -> FrameSlot {
        self.slot.clone()
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> anyhow::Result<i32> {
        let slot = self.slot.borrow();
        let cb = slot
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("frame callback not installed"))?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))
    }

    fn cancel(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Element handles and derived view state for the lifetime of the page.
pub struct PageContext {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub surface: Option<dom::CanvasSurface>,
    pub scroll_root: web::Element,
    pub triangle: Option<web::HtmlElement>,
    pub hexagon: Option<web::HtmlElement>,
    pub lines: Option<web::HtmlElement>,
    pub viewport: ViewportClass,
}

impl PageContext {
    pub fn from_document(window: web::Window, document: web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::required_by_id(&document, dom::CANVAS_ID)?;
        let scroll_root: web::Element = dom::required_by_id(&document, dom::SCROLL_ROOT_ID)?;
        let surface = match dom::CanvasSurface::from_canvas(&canvas) {
            Ok(s) => Some(s),
            Err(e) => {
                log::error!("[grid] no drawing surface: {:?}", e);
                None
            }
        };
        let triangle = dom::element_by_id(&document, dom::TRIANGLE_ID);
        let hexagon = dom::element_by_id(&document, dom::HEXAGON_ID);
        let lines = dom::element_by_id(&document, dom::LINES_ID);
        let viewport = ViewportClass::from_width(dom::viewport_width(&window));
        Ok(Self {
            window,
            document,
            canvas,
            surface,
            scroll_root,
            triangle,
            hexagon,
            lines,
            viewport,
        })
    }

    /// Repaint the grid and move the decorative shapes for `progress`.
    pub fn paint(&mut self, progress: f64) -> anyhow::Result<()> {
        let started = Instant::now();
        if let Some(surface) = self.surface.as_mut() {
            if self.canvas.is_connected() {
                render_grid(
                    surface,
                    progress,
                    self.canvas.width(),
                    self.canvas.height(),
                    self.viewport,
                );
            }
        }
        let failures = decor_transforms(progress).apply_each(|kind, t| match self.shape(kind) {
            Some(el) => dom::apply_transform(el, t),
            None => Ok(()),
        });
        for (kind, e) in failures {
            log::warn!("[grid] {} transform not applied: {:?}", kind.name(), e);
        }
        log::trace!(
            "[grid] progress={:.3} painted in {:?}",
            progress,
            started.elapsed()
        );
        Ok(())
    }

    fn shape(&self, kind: ShapeKind) -> Option<&web::HtmlElement> {
        match kind {
            ShapeKind::Triangle => self.triangle.as_ref(),
            ShapeKind::Hexagon => self.hexagon.as_ref(),
            ShapeKind::Lines => self.lines.as_ref(),
        }
    }

    /// Resize the canvas backing store and refresh class-dependent sizing.
    /// Does not repaint.
    pub fn on_resize(&mut self) {
        dom::sync_canvas_to_window(&self.canvas, &self.window);
        let class = ViewportClass::from_width(dom::viewport_width(&self.window));
        if class != self.viewport {
            log::debug!("[resize] viewport {} -> {}", self.viewport.name(), class.name());
            self.viewport = class;
        }
        self.apply_sizing();
    }

    pub fn apply_sizing(&self) {
        let sizing = ShapeSizing::for_class(self.viewport);
        if let Some(el) = &self.triangle {
            dom::apply_triangle_sizing(el, &sizing);
        }
        if let Some(el) = &self.hexagon {
            dom::apply_hexagon_sizing(el, &sizing);
        }
    }
}

struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

/// Event listeners registered by the page, removed together on teardown.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut()>,
    ) -> anyhow::Result<()> {
        target
            .add_event_listener_with_callback(
                event,
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        self.entries.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    pub fn remove_all(&mut self) {
        for l in self.entries.drain(..) {
            _ = l.target.remove_event_listener_with_callback(
                l.event,
                l.closure.as_ref().unchecked_ref::<js_sys::Function>(),
            );
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}

/// A page with the scroll-driven grid attached.
pub struct Page {
    ctx: Rc<RefCell<PageContext>>,
    tracker: Rc<RefCell<ScrollTracker<RafScheduler>>>,
    frame_slot: FrameSlot,
    listeners: Listeners,
}

impl Page {
    pub fn attach(window: web::Window, document: web::Document) -> anyhow::Result<Self> {
        let ctx = Rc::new(RefCell::new(PageContext::from_document(
            window.clone(),
            document.clone(),
        )?));
        ctx.borrow_mut().on_resize();

        let scheduler = RafScheduler::new(window.clone());
        let frame_slot = scheduler.slot();
        let tracker = Rc::new(RefCell::new(ScrollTracker::new(scheduler)));

        *frame_slot.borrow_mut() = Some(frame_callback(
            Rc::downgrade(&tracker),
            Rc::downgrade(&ctx),
        ));

        let mut listeners = Listeners::default();

        let scroll_root: web::EventTarget = ctx.borrow().scroll_root.clone().into();
        let tracker_scroll = tracker.clone();
        let ctx_scroll = ctx.clone();
        let on_scroll = Closure::wrap(Box::new(move || {
            let metrics = dom::scroll_metrics(&ctx_scroll.borrow().scroll_root);
            let doc = ctx_scroll.borrow().document.clone();
            let changed = tracker_scroll
                .borrow_mut()
                .sync(metrics, dom::section_bounds(&doc));
            if let Some(section) = changed {
                log::debug!("[scroll] active section: {}", section.id());
                dom::highlight_nav(&doc, section);
            }
        }) as Box<dyn FnMut()>);
        listeners.add(&scroll_root, "scroll", on_scroll)?;

        let ctx_resize = ctx.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            ctx_resize.borrow_mut().on_resize();
        }) as Box<dyn FnMut()>);
        let window_target: &web::EventTarget = window.as_ref();
        listeners.add(window_target, "resize", on_resize)?;

        // a page loaded mid-scroll (e.g. with a #contact hash) starts on that section
        let metrics = dom::scroll_metrics(&ctx.borrow().scroll_root);
        let initial = tracker
            .borrow_mut()
            .sync(metrics, dom::section_bounds(&document))
            .unwrap_or(Section::About);
        dom::highlight_nav(&document, initial);
        log::info!(
            "[grid] attached: canvas {}x{}, viewport {}",
            ctx.borrow().canvas.width(),
            ctx.borrow().canvas.height(),
            ctx.borrow().viewport.name()
        );

        Ok(Self {
            ctx,
            tracker,
            frame_slot,
            listeners,
        })
    }

    /// Cancel the pending frame, unregister listeners and release the page.
    pub fn dispose(mut self) {
        self.tracker.borrow_mut().dispose();
        self.listeners.remove_all();
        self.frame_slot.borrow_mut().take();
        self.ctx.borrow_mut().surface = None;
        log::info!("[grid] disposed");
    }
}

fn frame_callback(
    tracker: Weak<RefCell<ScrollTracker<RafScheduler>>>,
    ctx: Weak<RefCell<PageContext>>,
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let (Some(tracker), Some(ctx)) = (tracker.upgrade(), ctx.upgrade()) else {
            return;
        };
        let result = tracker.borrow_mut().run_frame(|progress| match ctx.try_borrow_mut() {
            Ok(mut c) => c.paint(progress),
            Err(_) => Err(anyhow::anyhow!("page context busy")),
        });
        if let Err(e) = result {
            log::error!("[grid] paint error: {:?}", e);
        }
    }) as Box<dyn FnMut()>)
}
