use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;
use dioxus::prelude::*;
use crate::configs::{ SiteConfig, TransitionTimings };
use crate::error::ThemeError;
use super::document::ThemeRoot;
use super::storage::PreferenceStore;
use super::theme_state::{ ColorScheme, Settle, ThemeMachine, ThemePhase, ThemeState, ToggleRequest };

/// Single owner of the site theme.
///
/// Every mutation goes through one of the step methods below; the async
/// driver [`drive_transition`] calls them in order with the configured delays
/// in between.
pub struct ThemeController {
    machine: ThemeMachine,
    store: Box<dyn PreferenceStore>,
    root: Box<dyn ThemeRoot>,
    storage_key: String,
    timings: TransitionTimings,
}

impl ThemeController {
    pub fn initialize(
        mut store: Box<dyn PreferenceStore>,
        mut root: Box<dyn ThemeRoot>,
        config: &SiteConfig
    ) -> Self {
        let key = config.storage_key.as_str();

        let scheme = match store.get(key) {
            Ok(Some(value)) => {
                if value != ColorScheme::Dark.as_stored() && value != ColorScheme::Light.as_stored() {
                    log::warn!("Unrecognised {} value {:?}, treating it as light", key, value);
                }
                ColorScheme::from_stored(&value)
            }
            Ok(None) => {
                log::info!("No saved theme, defaulting to dark");
                persist(store.as_mut(), key, ColorScheme::default());
                ColorScheme::default()
            }
            Err(e) => {
                log::warn!("Could not read saved theme ({}), defaulting to dark", e);
                persist(store.as_mut(), key, ColorScheme::default());
                ColorScheme::default()
            }
        };

        root.apply(scheme);
        log::info!("Initial theme: {:?}", scheme);

        Self {
            machine: ThemeMachine::new(scheme),
            store,
            root,
            storage_key: config.storage_key.clone(),
            timings: config.timings,
        }
    }

    pub fn state(&self) -> ThemeState {
        self.machine.state()
    }

    pub fn is_dark(&self) -> bool {
        self.machine.scheme().is_dark()
    }

    pub fn is_transitioning(&self) -> bool {
        self.machine.is_transitioning()
    }

    pub fn phase(&self) -> ThemePhase {
        self.machine.phase()
    }

    pub fn queued(&self) -> u32 {
        self.machine.queued()
    }

    pub fn timings(&self) -> TransitionTimings {
        self.timings
    }

    /// Returns true when the caller has to drive the new transition.
    pub fn request_toggle(&mut self) -> bool {
        let phase = self.machine.phase();
        let request = self.machine.request();
        log::debug!("Theme toggle requested while {:?}: {:?}", phase, request);
        request == ToggleRequest::Started
    }

    /// Flips the scheme and publishes it to the document root and the store.
    pub fn apply(&mut self) -> Result<ColorScheme, ThemeError> {
        let scheme = self.machine.flip()?;
        self.root.apply(scheme);
        persist(self.store.as_mut(), &self.storage_key, scheme);
        self.machine.commit()?;
        log::debug!("Theme applied: {:?}", scheme);
        Ok(scheme)
    }

    pub fn settle(&mut self) -> Result<Settle, ThemeError> {
        let settle = self.machine.settle()?;
        log::debug!("Theme transition settled: {:?}", settle);
        Ok(settle)
    }

    pub fn reset(&mut self) {
        log::warn!("Resetting theme transition from {:?}", self.machine.phase());
        self.machine.reset();
    }
}

fn persist(store: &mut dyn PreferenceStore, key: &str, scheme: ColorScheme) {
    if let Err(e) = store.set(key, scheme.as_stored()) {
        log::warn!("Could not save theme {:?}: {}", scheme, e);
    }
}

/// Something that hands out short-lived mutable access to the controller.
///
/// Implemented for the Dioxus signal the app shares through context, and for
/// a plain `Rc<RefCell<_>>` outside a component tree.
pub trait ThemeCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut ThemeController) -> R) -> R;

    /// Called when a driver goes away mid-transition. Must not panic: it runs
    /// from `Drop`, possibly while the app is tearing down.
    fn abandon(&mut self);
}

impl ThemeCell for Signal<ThemeController> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ThemeController) -> R) -> R {
        f(&mut *self.write())
    }

    fn abandon(&mut self) {
        match self.try_write() {
            Ok(mut theme) => theme.reset(),
            Err(e) => log::debug!("Theme signal gone, nothing to reset: {}", e),
        }
    }
}

impl ThemeCell for Rc<RefCell<ThemeController>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ThemeController) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn abandon(&mut self) {
        match self.try_borrow_mut() {
            Ok(mut theme) => theme.reset(),
            Err(e) => log::warn!("Theme busy, could not reset: {}", e),
        }
    }
}

/// Owns the cell while a transition runs and resets the machine if the
/// driver stops before `Settle::Done`, whether by error or by being dropped.
struct Transition<C: ThemeCell> {
    cell: C,
    settled: bool,
}

impl<C: ThemeCell> Drop for Transition<C> {
    fn drop(&mut self) {
        if !self.settled {
            self.cell.abandon();
        }
    }
}

/// Message to the app-wide driver: a toggle left `Idle` and needs driving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartTransition;

/// Requests a toggle and, if nothing else is driving one, runs the
/// transition to completion.
pub async fn toggle_theme<C, S, F>(mut cell: C, sleep: S)
    where C: ThemeCell, S: Fn(Duration) -> F, F: Future<Output = ()>
{
    if cell.update(|theme| theme.request_toggle()) {
        drive_transition(cell, sleep).await;
    }
}

/// Runs `FadingOut -> Applying -> FadingIn -> Idle`, looping while toggles
/// are queued. Never holds the cell across an await.
pub async fn drive_transition<C, S, F>(cell: C, sleep: S)
    where C: ThemeCell, S: Fn(Duration) -> F, F: Future<Output = ()>
{
    let mut transition = Transition { cell, settled: false };
    let timings = transition.cell.update(|theme| theme.timings());

    loop {
        sleep(timings.fade_out).await;
        if let Err(e) = transition.cell.update(|theme| theme.apply()) {
            log::error!("{}", e);
            return;
        }

        sleep(timings.fade_in).await;
        match transition.cell.update(|theme| theme.settle()) {
            Ok(Settle::Continue) => continue,
            Ok(Settle::Done) => {
                transition.settled = true;
                return;
            }
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        }
    }
}
