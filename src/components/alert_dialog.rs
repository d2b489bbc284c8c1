use dioxus::prelude::*;
use crate::components::button::{ Button, ButtonSize, ButtonVariant };
use crate::utils::ScrollLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AlertVariant {
    #[default]
    Info,
    Warning,
    Danger,
    Success,
}

impl AlertVariant {
    pub fn header_class(self) -> &'static str {
        match self {
            Self::Info => "bg-primary-500",
            Self::Warning => "bg-warning-500",
            Self::Danger => "bg-danger-500",
            Self::Success => "bg-success-500",
        }
    }

    pub fn confirm_variant(self) -> ButtonVariant {
        match self {
            Self::Info => ButtonVariant::Primary,
            Self::Warning => ButtonVariant::Warning,
            Self::Danger => ButtonVariant::Danger,
            Self::Success => ButtonVariant::Success,
        }
    }
}

/// Confirmation dialog with its own trigger button.
///
/// Pass `open` to control visibility from outside; otherwise the dialog
/// keeps its own state. Escape, the backdrop, the close button and
/// "cancel" all close it.
#[component]
pub fn AlertDialog(
    #[props(into)] title: String,
    description: Option<String>,
    #[props(into, default = "Cancel".to_string())] cancel_text: String,
    #[props(into, default = "Confirm".to_string())] confirm_text: String,
    on_confirm: Option<EventHandler<()>>,
    #[props(default)] variant: AlertVariant,
    trigger_label: Option<String>,
    #[props(default)] trigger_variant: ButtonVariant,
    #[props(default)] loading: bool,
    open: Option<Signal<bool>>,
    children: Element
) -> Element {
    let internal = use_signal(|| false);
    let mut is_open = open.unwrap_or(internal);
    let header_class = format!("flex justify-between items-center p-4 text-white {}", variant.header_class());

    let scroll_lock = use_hook(ScrollLock::shared);
    use_effect(move || scroll_lock.borrow_mut().set(is_open()));

    rsx! {
        if let Some(label) = trigger_label {
            Button {
                variant: trigger_variant,
                onclick: move |_| is_open.set(true),
                "{label}"
            }
        }

        if is_open() {
            div {
                class: "fixed inset-0 z-50 flex items-center justify-center",
                tabindex: "-1",
                onmounted: move |evt| async move {
                    let _ = evt.set_focus(true).await;
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Escape {
                        is_open.set(false);
                    }
                },
                div {
                    class: "fixed inset-0 bg-black/40 backdrop-blur-sm animate-fade-in",
                    onclick: move |_| is_open.set(false),
                }
                div {
                    class: "relative bg-gray-50 dark:bg-gray-800 rounded-lg shadow-xl w-full max-w-md mx-4 overflow-hidden animate-dialog-in",
                    role: "alertdialog",
                    div {
                        class: "{header_class}",
                        h3 { class: "text-lg font-semibold", "{title}" }
                        button {
                            class: "text-white/80 hover:text-white transition-colors",
                            aria_label: "Close",
                            onclick: move |_| is_open.set(false),
                            "✕"
                        }
                    }
                    div {
                        class: "px-4 py-4",
                        if let Some(text) = description {
                            p { class: "text-gray-600 dark:text-gray-300 mb-4", "{text}" }
                        }
                        {children}
                    }
                    div {
                        class: "flex justify-end gap-3 p-4 border-t border-gray-200 dark:border-gray-700",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            onclick: move |_| is_open.set(false),
                            "{cancel_text}"
                        }
                        Button {
                            variant: variant.confirm_variant(),
                            size: ButtonSize::Sm,
                            loading: loading,
                            onclick: move |_| {
                                if let Some(handler) = on_confirm {
                                    handler.call(());
                                }
                                is_open.set(false);
                            },
                            "{confirm_text}"
                        }
                    }
                }
            }
        }
    }
}
