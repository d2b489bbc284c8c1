use dioxus::prelude::*;
use crate::components::{ AlertDialog, AlertVariant, Button, ButtonVariant, CodeBlock };

const ALERT_DIALOG_CODE: &str = r#"use aabha::components::{AlertDialog, AlertVariant, ButtonVariant};

// Basic usage
AlertDialog {
    title: "Delete Account",
    description: "Are you sure you want to delete your account? This action cannot be undone.".to_string(),
    variant: AlertVariant::Danger,
    trigger_label: "Delete Account".to_string(),
    trigger_variant: ButtonVariant::Danger,
    on_confirm: move |_| log::info!("Account deleted"),
}

// With custom buttons
AlertDialog {
    title: "Save Changes",
    description: "Do you want to save your changes?".to_string(),
    trigger_label: "Save".to_string(),
    confirm_text: "Save Changes",
    cancel_text: "Discard",
    on_confirm: move |_| log::info!("Changes saved"),
}

// Controlled from outside
let open = use_signal(|| false);
AlertDialog { title: "Heads up", open: open }
"#;

#[component]
pub fn AlertDialogPreview() -> Element {
    let mut controlled = use_signal(|| false);

    rsx! {
        div {
            class: "space-y-12",
            section {
                h3 { class: "text-lg font-semibold mb-4 text-gray-900 dark:text-white", "Basic Alert Dialog" }
                div {
                    class: "flex flex-wrap gap-4",
                    AlertDialog {
                        title: "Delete Account",
                        description: "Are you sure you want to delete your account? This action cannot be undone.".to_string(),
                        variant: AlertVariant::Danger,
                        trigger_label: "Delete Account".to_string(),
                        trigger_variant: ButtonVariant::Danger,
                        on_confirm: move |_| log::info!("Account deleted"),
                    }
                }
            }
            section {
                h3 { class: "text-lg font-semibold mb-4 text-gray-900 dark:text-white", "Custom Button Text" }
                div {
                    class: "flex flex-wrap gap-4",
                    AlertDialog {
                        title: "Save Changes",
                        description: "Do you want to save your changes?".to_string(),
                        trigger_label: "Save".to_string(),
                        confirm_text: "Save Changes",
                        cancel_text: "Discard",
                        on_confirm: move |_| log::info!("Changes saved"),
                    }
                }
            }
            section {
                h3 { class: "text-lg font-semibold mb-4 text-gray-900 dark:text-white", "Variants" }
                div {
                    class: "flex flex-wrap gap-4",
                    AlertDialog {
                        title: "Heads up",
                        description: "A new version of the library is available.".to_string(),
                        trigger_label: "Info".to_string(),
                    }
                    AlertDialog {
                        title: "Unsaved work",
                        description: "Leaving now will discard your draft.".to_string(),
                        variant: AlertVariant::Warning,
                        trigger_label: "Warning".to_string(),
                        trigger_variant: ButtonVariant::Warning,
                    }
                    AlertDialog {
                        title: "All done",
                        description: "Your changes were published.".to_string(),
                        variant: AlertVariant::Success,
                        trigger_label: "Success".to_string(),
                        trigger_variant: ButtonVariant::Success,
                    }
                }
            }
            section {
                h3 { class: "text-lg font-semibold mb-4 text-gray-900 dark:text-white", "Loading State" }
                div {
                    class: "flex flex-wrap gap-4",
                    AlertDialog {
                        title: "Processing",
                        description: "Please wait while we process your request...".to_string(),
                        trigger_label: "Process".to_string(),
                        loading: true,
                    }
                }
            }
            section {
                h3 { class: "text-lg font-semibold mb-4 text-gray-900 dark:text-white", "Controlled" }
                div {
                    class: "flex flex-wrap gap-4",
                    Button { variant: ButtonVariant::Outline, onclick: move |_| controlled.set(true), "Open from outside" }
                    AlertDialog {
                        title: "Controlled dialog",
                        open: controlled,
                        p { class: "text-gray-600 dark:text-gray-300", "Visibility is owned by the page, not the dialog." }
                    }
                }
            }
            section {
                h3 { class: "text-lg font-semibold mb-4 text-gray-900 dark:text-white", "Code Example" }
                CodeBlock { code: ALERT_DIALOG_CODE, show_line_numbers: true }
            }
        }
    }
}
