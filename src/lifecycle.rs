/// Why the page is being hidden, from `PageTransitionEvent.persisted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// Entering the back/forward cache; it may be shown again without reloading.
    Cached,
    Unloading,
}

impl PageHide {
    #[inline]
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Cached
        } else {
            PageHide::Unloading
        }
    }

    /// Cached pages keep their listeners so they work again on restore.
    #[inline]
    pub fn releases_page(self) -> bool {
        matches!(self, PageHide::Unloading)
    }
}
