use crate::constants::SECTION_MARKER_Y_PX;

/// Scroll geometry of the host container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// Normalized scroll position in [0, 1].
///
/// A container without overflow (or with nonsensical geometry) reports 0.
#[inline]
pub fn scroll_progress(m: ScrollMetrics) -> f64 {
    let max_scroll = m.scroll_height - m.client_height;
    if max_scroll.is_nan() || max_scroll <= 0.0 {
        return 0.0;
    }
    let p = m.scroll_top / max_scroll;
    if p.is_finite() {
        p.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    Idle,
    Scheduled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub frame: FrameState,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            frame: FrameState::Idle,
        }
    }
}

/// Source of "run before the next repaint" callbacks.
pub trait FrameScheduler {
    type Handle: Copy;
    fn request(&mut self) -> anyhow::Result<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Named page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Projects, Section::Contact];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// Vertical extent of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    #[inline]
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

// Returns the frame state to Idle however the paint step exits.
struct FrameGuard<'a> {
    state: &'a mut FrameState,
}

impl Drop for FrameGuard<'_> {
    fn drop(&mut self) {
        *self.state = FrameState::Idle;
    }
}

/// Tracks scroll progress and coalesces repaint requests to one per frame.
pub struct ScrollTracker<S: FrameScheduler> {
    state: ScrollState,
    pending: Option<S::Handle>,
    scheduler: S,
    active: Section,
    disposed: bool,
}

impl<S: FrameScheduler> ScrollTracker<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            state: ScrollState::default(),
            pending: None,
            scheduler,
            active: Section::About,
            disposed: false,
        }
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    #[inline]
    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Record a scroll notification and make sure one frame is pending.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        if self.disposed {
            return;
        }
        self.state.progress = scroll_progress(metrics);
        self.request_paint();
    }

    /// Schedule a frame for the stored progress unless one is already pending.
    pub fn request_paint(&mut self) {
        if self.disposed || self.state.frame == FrameState::Scheduled {
            return;
        }
        match self.scheduler.request() {
            Ok(handle) => {
                self.pending = Some(handle);
                self.state.frame = FrameState::Scheduled;
            }
            Err(e) => log::warn!("[scroll] frame request failed: {:?}", e),
        }
    }

    /// Frame callback body: paint with the latest progress, then go Idle.
    ///
    /// A frame that was not scheduled (or was cancelled) does nothing.
    pub fn run_frame<F>(&mut self, paint: F) -> anyhow::Result<()>
    where
        F: FnOnce(f64) -> anyhow::Result<()>,
    {
        if self.state.frame == FrameState::Idle {
            return Ok(());
        }
        self.pending = None;
        let progress = self.state.progress;
        let _guard = FrameGuard {
            state: &mut self.state.frame,
        };
        paint(progress)
    }

    /// Update the active section from section bounds given in document order.
    ///
    /// Returns the new section only when it changed.
    pub fn observe_sections<I>(&mut self, bounds: I) -> Option<Section>
    where
        I: IntoIterator<Item = (Section, SectionBounds)>,
    {
        let hit = bounds
            .into_iter()
            .find(|(_, b)| b.straddles(SECTION_MARKER_Y_PX))
            .map(|(s, _)| s)?;
        if hit == self.active {
            return None;
        }
        self.active = hit;
        Some(hit)
    }

    /// Record a scroll position and refresh the active section in one step.
    ///
    /// Returns the new section only when it changed.
    pub fn sync<I>(&mut self, metrics: ScrollMetrics, bounds: I) -> Option<Section>
    where
        I: IntoIterator<Item = (Section, SectionBounds)>,
    {
        self.on_scroll(metrics);
        if self.disposed {
            return None;
        }
        self.observe_sections(bounds)
    }

    /// Cancel any pending frame and stop accepting notifications.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.state.frame = FrameState::Idle;
        self.disposed = true;
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
