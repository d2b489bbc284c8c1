use std::cell::{ Cell, RefCell };
use std::rc::Rc;
use super::theme_state::ColorScheme;

pub const DARK_CLASS: &str = "dark";

/// The global presentation flag every style keys off.
pub trait ThemeRoot {
    fn apply(&mut self, scheme: ColorScheme);
}

/// `<html class="dark">` in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeRoot for DocumentRoot {
    #[cfg(target_arch = "wasm32")]
    fn apply(&mut self, scheme: ColorScheme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element()) else {
            log::warn!("No document element to apply {:?} to", scheme);
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, scheme.is_dark()) {
            log::warn!("Failed to set {:?} class: {:?}", DARK_CLASS, e);
        }
    }

    // Native renderers pick the class up from the app shell instead.
    #[cfg(not(target_arch = "wasm32"))]
    fn apply(&mut self, scheme: ColorScheme) {
        log::debug!("Theme root now {:?}", scheme);
    }
}

thread_local! {
    static SCROLL_LOCKS: Cell<u32> = const { Cell::new(0) };
}

/// One overlay's claim on the page scroll.
///
/// Scrolling stays locked while any lock is held, so a dialog closing does not
/// unlock the page under an open sidebar. Dropping a held lock releases it.
#[derive(Debug, Default)]
pub struct ScrollLock {
    held: bool,
}

impl ScrollLock {
    /// A lock shareable between a component's effect and its scope.
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn set(&mut self, locked: bool) {
        if locked == self.held {
            return;
        }
        self.held = locked;

        // Fails only while the thread is shutting down; nothing left to unlock then.
        let Ok(holders) = SCROLL_LOCKS.try_with(|count| {
            let next = if locked { count.get() + 1 } else { count.get().saturating_sub(1) };
            count.set(next);
            next
        }) else {
            return;
        };
        // Only the first claim and the last release touch the page.
        if holders == u32::from(locked) {
            apply_scroll_locked(locked);
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.set(false);
    }
}

/// Number of overlays currently holding the page scroll.
pub fn scroll_lock_holders() -> u32 {
    SCROLL_LOCKS.with(Cell::get)
}

fn apply_scroll_locked(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body()) else {
            return;
        };
        let value = if locked { "hidden" } else { "" };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("Failed to set body overflow: {:?}", e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("Page scroll locked: {}", locked);
    }
}
