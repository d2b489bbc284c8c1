use crate::error::ThemeError;

/// Persisted value meaning dark mode. Anything else reads as light.
pub const DARK_VALUE: &str = "true";
pub const LIGHT_VALUE: &str = "false";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { ColorScheme::Dark } else { ColorScheme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }

    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            ColorScheme::Light => LIGHT_VALUE,
            ColorScheme::Dark => DARK_VALUE,
        }
    }

    pub fn from_stored(value: &str) -> Self {
        Self::from_dark(value == DARK_VALUE)
    }
}

/// Where a theme transition currently is.
///
/// `Idle` is the only resting phase. `Applying` is held only while the new
/// scheme is pushed to the document root and the preference store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePhase {
    #[default]
    Idle,
    FadingOut,
    Applying,
    FadingIn,
}

/// What views get to see of the theme.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
    pub is_transitioning: bool,
}

/// Result of asking for a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleRequest {
    /// The machine left `Idle`; the caller owns driving the transition.
    Started,
    /// A transition is already running and will pick this one up.
    Queued,
}

/// Result of closing the fade-in window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    Done,
    /// Another toggle was queued; the machine is fading out again.
    Continue,
}

/// Pure transition state machine. Holds no storage and no timers.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ThemeMachine {
    scheme: ColorScheme,
    phase: ThemePhase,
    queued: u32,
}

impl ThemeMachine {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            phase: ThemePhase::Idle,
            queued: 0,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn phase(&self) -> ThemePhase {
        self.phase
    }

    pub fn queued(&self) -> u32 {
        self.queued
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != ThemePhase::Idle
    }

    pub fn state(&self) -> ThemeState {
        ThemeState {
            is_dark: self.scheme.is_dark(),
            is_transitioning: self.is_transitioning(),
        }
    }

    pub fn request(&mut self) -> ToggleRequest {
        if self.phase == ThemePhase::Idle {
            self.phase = ThemePhase::FadingOut;
            ToggleRequest::Started
        } else {
            self.queued = self.queued.saturating_add(1);
            ToggleRequest::Queued
        }
    }

    /// `FadingOut -> Applying`, flipping the scheme.
    pub fn flip(&mut self) -> Result<ColorScheme, ThemeError> {
        self.require_phase(ThemePhase::FadingOut)?;
        self.scheme = self.scheme.toggle();
        self.phase = ThemePhase::Applying;
        Ok(self.scheme)
    }

    /// `Applying -> FadingIn`, once the flipped scheme has been published.
    pub fn commit(&mut self) -> Result<(), ThemeError> {
        self.require_phase(ThemePhase::Applying)?;
        self.phase = ThemePhase::FadingIn;
        Ok(())
    }

    pub fn settle(&mut self) -> Result<Settle, ThemeError> {
        self.require_phase(ThemePhase::FadingIn)?;
        if self.queued > 0 {
            self.queued -= 1;
            self.phase = ThemePhase::FadingOut;
            Ok(Settle::Continue)
        } else {
            self.phase = ThemePhase::Idle;
            Ok(Settle::Done)
        }
    }

    /// Drops queued toggles and returns to `Idle`, keeping the current scheme.
    pub fn reset(&mut self) {
        self.phase = ThemePhase::Idle;
        self.queued = 0;
    }

    fn require_phase(&self, expected: ThemePhase) -> Result<(), ThemeError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ThemeError::UnexpectedPhase {
                expected,
                found: self.phase,
            })
        }
    }
}
