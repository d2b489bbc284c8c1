use dioxus::prelude::*;

const BASE_CLASS: &str =
    "inline-flex items-center justify-center transition-all focus:outline-none focus:ring-2 focus:ring-offset-2";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
    Success,
    Warning,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary =>
                "bg-primary-500 text-white hover:bg-primary-600 focus:ring-primary-400 shadow",
            Self::Secondary =>
                "bg-secondary-500 text-white hover:bg-secondary-600 focus:ring-secondary-400 shadow",
            Self::Outline =>
                "bg-transparent border border-gray-200 text-gray-600 hover:bg-gray-50 focus:ring-gray-300 dark:border-gray-700 dark:text-gray-300 dark:hover:bg-gray-800",
            Self::Ghost =>
                "bg-transparent text-gray-600 hover:bg-gray-50 focus:ring-gray-300 dark:text-gray-300 dark:hover:bg-gray-800",
            Self::Danger =>
                "bg-danger-500 text-white hover:bg-danger-600 focus:ring-danger-400 shadow",
            Self::Success =>
                "bg-success-500 text-white hover:bg-success-600 focus:ring-success-400 shadow",
            Self::Warning =>
                "bg-warning-500 text-white hover:bg-warning-600 focus:ring-warning-400 shadow",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Xs => "text-xs h-6 px-2",
            Self::Sm => "text-sm h-8 px-2.5",
            Self::Md => "text-sm h-9 px-3",
            Self::Lg => "text-base h-10 px-4",
            Self::Xl => "text-base h-11 px-5",
        }
    }

    /// Glyph size in pixels for icons inside a button of this size.
    pub fn icon_px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 14,
            Self::Md => 16,
            Self::Lg => 18,
            Self::Xl => 20,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rounded {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Full,
}

impl Rounded {
    pub fn class(self) -> &'static str {
        match self {
            Self::None => "rounded-none",
            Self::Sm => "rounded-sm",
            Self::Md => "rounded-md",
            Self::Lg => "rounded-lg",
            Self::Full => "rounded-full",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
}

/// Full class list for a button. `inactive` covers both disabled and loading.
pub fn button_class(
    variant: ButtonVariant,
    size: ButtonSize,
    rounded: Rounded,
    has_icon: bool,
    inactive: bool,
    extra: &str
) -> String {
    let mut classes = vec![BASE_CLASS, variant.class(), size.class(), rounded.class()];
    if has_icon {
        classes.push("gap-1.5");
    }
    if inactive {
        classes.push("opacity-60 cursor-not-allowed");
    }
    if !extra.trim().is_empty() {
        classes.push(extra.trim());
    }
    classes.join(" ")
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] rounded: Rounded,
    icon: Option<&'static str>,
    #[props(default)] icon_position: IconPosition,
    #[props(default)] class: String,
    #[props(default)] disabled: bool,
    #[props(default = true)] animated: bool,
    #[props(default)] loading: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element
) -> Element {
    let mut hovered = use_signal(|| false);
    let inactive = disabled || loading;
    let classes = button_class(variant, size, rounded, icon.is_some(), inactive, &class);
    let icon_style = format!("font-size: {}px; line-height: 1;", size.icon_px());
    let icon_class = if animated && hovered() { "inline-block animate-icon-pop" } else { "inline-block" };

    rsx! {
        button {
            class: "{classes}",
            disabled: inactive,
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "inline-block animate-spin", style: "{icon_style}", "◌" }
            } else {
                if icon_position == IconPosition::Left {
                    if let Some(glyph) = icon {
                        span { class: icon_class, style: "{icon_style}", "{glyph}" }
                    }
                }
                {children}
                if icon_position == IconPosition::Right {
                    if let Some(glyph) = icon {
                        span { class: icon_class, style: "{icon_style}", "{glyph}" }
                    }
                }
            }
        }
    }
}
