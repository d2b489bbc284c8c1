#[cfg(test)]
mod tests {
    use crate::error::ThemeError;
    use crate::utils::{ ColorScheme, Settle, ThemeMachine, ThemePhase, ToggleRequest };

    #[test]
    fn test_scheme_stored_form() {
        assert_eq!(ColorScheme::Dark.as_stored(), "true");
        assert_eq!(ColorScheme::Light.as_stored(), "false");
        assert_eq!(ColorScheme::from_stored("true"), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_stored("false"), ColorScheme::Light);
        assert_eq!(ColorScheme::from_stored("TRUE"), ColorScheme::Light);
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
    }

    #[test]
    fn test_single_toggle_walks_every_phase() {
        let mut machine = ThemeMachine::new(ColorScheme::Dark);
        assert_eq!(machine.phase(), ThemePhase::Idle);
        assert!(!machine.is_transitioning());

        assert_eq!(machine.request(), ToggleRequest::Started);
        assert_eq!(machine.phase(), ThemePhase::FadingOut);
        assert!(machine.state().is_transitioning);
        assert!(machine.state().is_dark);

        assert_eq!(machine.flip(), Ok(ColorScheme::Light));
        assert_eq!(machine.phase(), ThemePhase::Applying);
        assert!(!machine.state().is_dark);

        machine.commit().unwrap();
        assert_eq!(machine.phase(), ThemePhase::FadingIn);
        assert!(machine.is_transitioning());

        assert_eq!(machine.settle(), Ok(Settle::Done));
        assert_eq!(machine.phase(), ThemePhase::Idle);
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn test_overlapping_requests_are_queued() {
        let mut machine = ThemeMachine::new(ColorScheme::Dark);
        assert_eq!(machine.request(), ToggleRequest::Started);
        assert_eq!(machine.request(), ToggleRequest::Queued);
        assert_eq!(machine.queued(), 1);

        machine.flip().unwrap();
        machine.commit().unwrap();
        // Arriving mid fade-in still queues instead of restarting.
        assert_eq!(machine.request(), ToggleRequest::Queued);
        assert_eq!(machine.queued(), 2);

        assert_eq!(machine.settle(), Ok(Settle::Continue));
        assert_eq!(machine.phase(), ThemePhase::FadingOut);
        machine.flip().unwrap();
        machine.commit().unwrap();
        assert_eq!(machine.settle(), Ok(Settle::Continue));
        machine.flip().unwrap();
        machine.commit().unwrap();
        assert_eq!(machine.settle(), Ok(Settle::Done));

        // Three requests, three flips.
        assert_eq!(machine.scheme(), ColorScheme::Light);
        assert_eq!(machine.queued(), 0);
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn test_out_of_order_steps_are_rejected() {
        let mut machine = ThemeMachine::new(ColorScheme::Light);
        assert_eq!(
            machine.flip(),
            Err(ThemeError::UnexpectedPhase {
                expected: ThemePhase::FadingOut,
                found: ThemePhase::Idle,
            })
        );
        assert!(machine.settle().is_err());
        assert_eq!(machine.scheme(), ColorScheme::Light);

        machine.request();
        assert!(machine.commit().is_err());
        assert!(machine.settle().is_err());
        assert_eq!(machine.phase(), ThemePhase::FadingOut);
    }

    #[test]
    fn test_reset_clears_queue_and_keeps_scheme() {
        let mut machine = ThemeMachine::new(ColorScheme::Dark);
        machine.request();
        machine.request();
        machine.flip().unwrap();
        machine.reset();

        assert_eq!(machine.phase(), ThemePhase::Idle);
        assert_eq!(machine.queued(), 0);
        assert_eq!(machine.scheme(), ColorScheme::Light);
        assert_eq!(machine.request(), ToggleRequest::Started);
    }
}
