// Host-side tests for page lifecycle decisions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn back_forward_cache_keeps_page_attached() {
    let hide = PageHide::from_persisted(true);
    assert_eq!(hide, PageHide::Cached);
    assert!(!hide.releases_page());
}

#[test]
fn real_unload_releases_page() {
    let hide = PageHide::from_persisted(false);
    assert_eq!(hide, PageHide::Unloading);
    assert!(hide.releases_page());
}
