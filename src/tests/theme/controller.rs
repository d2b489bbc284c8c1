#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use futures::executor::block_on;
    use futures::future::{ pending, ready, Ready };
    use futures::FutureExt;
    use crate::configs::DEFAULT_STORAGE_KEY;
    use crate::tests::common::{ setup, test_config };
    use crate::tests::common::mocks::{ CountingStore, RecordingRoot, UnavailableStore };
    use crate::utils::{
        drive_transition,
        toggle_theme,
        ColorScheme,
        MemoryStore,
        ThemeCell,
        ThemeController,
        ThemePhase,
    };

    type Cell = Rc<RefCell<ThemeController>>;

    fn controller(store: MemoryStore, root: RecordingRoot) -> Cell {
        Rc::new(RefCell::new(ThemeController::initialize(Box::new(store), Box::new(root), &test_config())))
    }

    fn instant(_: Duration) -> Ready<()> {
        ready(())
    }

    #[test]
    fn test_initialize_defaults_to_dark_and_persists() {
        setup();
        let store = MemoryStore::new();
        let root = RecordingRoot::default();
        let theme = controller(store.clone(), root.clone());

        assert!(theme.borrow().is_dark());
        assert!(!theme.borrow().is_transitioning());
        assert_eq!(store.entry(DEFAULT_STORAGE_KEY).as_deref(), Some("true"));
        assert_eq!(root.last(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_initialize_respects_saved_light() {
        setup();
        let store = CountingStore::with_entry(DEFAULT_STORAGE_KEY, "false");
        let root = RecordingRoot::default();
        let theme = ThemeController::initialize(Box::new(store.clone()), Box::new(root.clone()), &test_config());

        assert!(!theme.is_dark());
        assert_eq!(*store.writes.borrow(), 0);
        assert_eq!(store.inner.entry(DEFAULT_STORAGE_KEY).as_deref(), Some("false"));
        assert_eq!(root.last(), Some(ColorScheme::Light));
    }

    #[test]
    fn test_initialize_treats_unknown_value_as_light_without_rewriting() {
        setup();
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "yes");
        let theme = controller(store.clone(), RecordingRoot::default());

        assert!(!theme.borrow().is_dark());
        assert_eq!(store.entry(DEFAULT_STORAGE_KEY).as_deref(), Some("yes"));
    }

    #[test]
    fn test_initialize_uses_configured_key() {
        setup();
        let store = MemoryStore::with_entry("siteTheme", "false");
        let mut config = test_config();
        config.storage_key = "siteTheme".to_string();
        let theme = ThemeController::initialize(Box::new(store.clone()), Box::new(RecordingRoot::default()), &config);

        assert!(!theme.is_dark());
        assert_eq!(store.entry(DEFAULT_STORAGE_KEY), None);
    }

    #[test]
    fn test_single_toggle_flips_and_persists() {
        setup();
        let store = MemoryStore::new();
        let root = RecordingRoot::default();
        let theme = controller(store.clone(), root.clone());

        block_on(toggle_theme(theme.clone(), instant));

        let theme = theme.borrow();
        assert!(!theme.is_dark());
        assert!(!theme.is_transitioning());
        assert_eq!(theme.phase(), ThemePhase::Idle);
        assert_eq!(store.entry(DEFAULT_STORAGE_KEY).as_deref(), Some("false"));
        assert_eq!(root.last(), Some(ColorScheme::Light));
    }

    #[test]
    fn test_two_sequential_toggles_restore_original() {
        setup();
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "false");
        let theme = controller(store.clone(), RecordingRoot::default());

        block_on(toggle_theme(theme.clone(), instant));
        assert!(theme.borrow().is_dark());
        block_on(toggle_theme(theme.clone(), instant));

        assert!(!theme.borrow().is_dark());
        assert!(!theme.borrow().is_transitioning());
        assert_eq!(store.entry(DEFAULT_STORAGE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_transitioning_spans_both_delays() {
        setup();
        let theme = controller(MemoryStore::new(), RecordingRoot::default());
        let observed = Rc::new(RefCell::new(Vec::new()));

        let sleep = {
            let theme = theme.clone();
            let observed = observed.clone();
            move |delay: Duration| {
                let snapshot = theme.borrow().state();
                observed.borrow_mut().push((delay, snapshot.is_dark, snapshot.is_transitioning));
                ready(())
            }
        };

        assert!(!theme.borrow().is_transitioning());
        block_on(toggle_theme(theme.clone(), sleep));

        let timings = test_config().timings;
        assert_eq!(
            *observed.borrow(),
            vec![
                // Still dark while fading out, flipped during fade-in.
                (timings.fade_out, true, true),
                (timings.fade_in, false, true)
            ]
        );
        assert!(!theme.borrow().is_transitioning());
    }

    #[test]
    fn test_toggle_requested_mid_transition_is_queued() {
        setup();
        let store = MemoryStore::new();
        let root = RecordingRoot::default();
        let theme = controller(store.clone(), root.clone());

        // A second click lands while the first transition is fading out.
        let sleep = {
            let theme = theme.clone();
            let fired = Rc::new(RefCell::new(false));
            move |_: Duration| {
                if !*fired.borrow() {
                    *fired.borrow_mut() = true;
                    let started = theme.borrow_mut().request_toggle();
                    assert!(!started);
                }
                ready(())
            }
        };

        block_on(toggle_theme(theme.clone(), sleep));

        let theme = theme.borrow();
        assert!(theme.is_dark());
        assert!(!theme.is_transitioning());
        assert_eq!(theme.queued(), 0);
        // Initial apply plus one per flip.
        assert_eq!(root.count(), 3);
        assert_eq!(store.entry(DEFAULT_STORAGE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_queued_request_does_not_start_second_driver() {
        setup();
        let mut theme = controller(MemoryStore::new(), RecordingRoot::default());

        assert!(theme.update(|t| t.request_toggle()));
        // Nothing to drive: the in-flight transition owns it.
        block_on(toggle_theme(theme.clone(), instant));
        assert_eq!(theme.borrow().queued(), 1);
        assert_eq!(theme.borrow().phase(), ThemePhase::FadingOut);

        block_on(drive_transition(theme.clone(), instant));
        assert!(theme.borrow().is_dark());
        assert!(!theme.borrow().is_transitioning());
    }

    #[test]
    fn test_driver_without_request_resets_instead_of_sticking() {
        setup();
        let theme = controller(MemoryStore::new(), RecordingRoot::default());

        block_on(drive_transition(theme.clone(), instant));

        assert!(theme.borrow().is_dark());
        assert_eq!(theme.borrow().phase(), ThemePhase::Idle);
    }

    #[test]
    fn test_unavailable_storage_is_ignored() {
        setup();
        let store = UnavailableStore::default();
        let root = RecordingRoot::default();
        let theme: Cell = Rc::new(
            RefCell::new(ThemeController::initialize(Box::new(store.clone()), Box::new(root.clone()), &test_config()))
        );

        assert!(theme.borrow().is_dark());
        assert_eq!(*store.writes.borrow(), 1);

        block_on(toggle_theme(theme.clone(), instant));

        assert!(!theme.borrow().is_dark());
        assert!(!theme.borrow().is_transitioning());
        assert_eq!(*store.writes.borrow(), 2);
        assert_eq!(root.last(), Some(ColorScheme::Light));
    }

    #[test]
    fn test_dropped_driver_resets_transition() {
        setup();
        let store = MemoryStore::new();
        let theme = controller(store.clone(), RecordingRoot::default());

        // The owning task is cancelled while fading out.
        let cancelled = toggle_theme(theme.clone(), |_: Duration| pending::<()>()).now_or_never();
        assert!(cancelled.is_none());

        assert_eq!(theme.borrow().phase(), ThemePhase::Idle);
        assert!(!theme.borrow().is_transitioning());
        assert!(theme.borrow().is_dark());

        block_on(toggle_theme(theme.clone(), instant));
        assert!(!theme.borrow().is_dark());
        assert!(!theme.borrow().is_transitioning());
        assert_eq!(theme.borrow().queued(), 0);
        assert_eq!(store.entry(DEFAULT_STORAGE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_dropped_driver_after_flip_keeps_new_scheme() {
        setup();
        let theme = controller(MemoryStore::new(), RecordingRoot::default());

        // Fade-out finishes, the fade-in never does.
        let sleep = {
            let fade_out = test_config().timings.fade_out;
            move |delay: Duration| {
                if delay == fade_out { ready(()).left_future() } else { pending().right_future() }
            }
        };
        assert!(toggle_theme(theme.clone(), sleep).now_or_never().is_none());

        let theme = theme.borrow();
        assert!(!theme.is_dark());
        assert_eq!(theme.phase(), ThemePhase::Idle);
    }
}
