use dioxus::prelude::*;
use crate::components::{ Button, ButtonSize, ButtonVariant, CodeBlock, IconPosition, Rounded };

const BUTTON_CODE: &str = r#"use aabha::components::{Button, ButtonSize, ButtonVariant, IconPosition, Rounded};

// Basic variants
Button { variant: ButtonVariant::Primary, "Primary" }
Button { variant: ButtonVariant::Secondary, "Secondary" }
Button { variant: ButtonVariant::Outline, "Outline" }
Button { variant: ButtonVariant::Ghost, "Ghost" }
Button { variant: ButtonVariant::Danger, "Danger" }
Button { variant: ButtonVariant::Success, "Success" }

// With icons (animated by default)
Button { icon: "✉", "Email" }

// With non-animated icons
Button { variant: ButtonVariant::Outline, icon: "→", animated: false, "Next" }

// Icon position
Button { variant: ButtonVariant::Ghost, icon: "⚙", icon_position: IconPosition::Right, "Settings" }

// Sizes
Button { size: ButtonSize::Xs, "XS" }
Button { size: ButtonSize::Xl, "XL" }

// Rounded corners
Button { rounded: Rounded::None, "Square" }
Button { rounded: Rounded::Full, "Pill" }

// Disabled state
Button { disabled: true, "Disabled" }
"#;

#[component]
fn PreviewSection(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        section {
            h3 { class: "text-lg font-semibold mb-4 text-gray-900 dark:text-white", "{title}" }
            div { class: "flex flex-wrap gap-4 items-center", {children} }
        }
    }
}

#[component]
pub fn ButtonPreview() -> Element {
    rsx! {
        div {
            class: "space-y-12",
            PreviewSection {
                title: "Button Variants",
                Button { variant: ButtonVariant::Primary, "Primary" }
                Button { variant: ButtonVariant::Secondary, "Secondary" }
                Button { variant: ButtonVariant::Outline, "Outline" }
                Button { variant: ButtonVariant::Ghost, "Ghost" }
                Button { variant: ButtonVariant::Danger, "Danger" }
                Button { variant: ButtonVariant::Success, "Success" }
                Button { variant: ButtonVariant::Warning, "Warning" }
            }
            PreviewSection {
                title: "Button Sizes",
                Button { size: ButtonSize::Xs, "XS" }
                Button { size: ButtonSize::Sm, "SM" }
                Button { size: ButtonSize::Md, "MD" }
                Button { size: ButtonSize::Lg, "LG" }
                Button { size: ButtonSize::Xl, "XL" }
            }
            PreviewSection {
                title: "Button Shapes",
                Button { rounded: Rounded::None, "Square" }
                Button { rounded: Rounded::Sm, "Small" }
                Button { rounded: Rounded::Md, "Medium" }
                Button { rounded: Rounded::Lg, "Large" }
                Button { size: ButtonSize::Xs, rounded: Rounded::Full, "Pill" }
            }
            PreviewSection {
                title: "With Animated Icons (hover over button)",
                Button { variant: ButtonVariant::Primary, icon: "✉", "Email" }
                Button { variant: ButtonVariant::Outline, icon: "→", icon_position: IconPosition::Right, "Next" }
                Button { variant: ButtonVariant::Ghost, icon: "⚙", "Settings" }
                Button { variant: ButtonVariant::Success, icon: "+", size: ButtonSize::Sm, "Add" }
                Button { variant: ButtonVariant::Danger, icon: "🗑", size: ButtonSize::Xs, "Delete" }
            }
            PreviewSection {
                title: "With Non-Animated Icons",
                Button { variant: ButtonVariant::Primary, icon: "♥", animated: false, "Like" }
                Button {
                    variant: ButtonVariant::Outline,
                    icon: "↗",
                    icon_position: IconPosition::Right,
                    animated: false,
                    "Visit"
                }
                Button { variant: ButtonVariant::Secondary, icon: "⤓", animated: false, size: ButtonSize::Lg, "Download" }
            }
            PreviewSection {
                title: "Loading & Disabled",
                Button { variant: ButtonVariant::Primary, loading: true, "Saving" }
                Button { variant: ButtonVariant::Primary, disabled: true, "Disabled" }
                Button { variant: ButtonVariant::Outline, disabled: true, icon: "✉", "Disabled" }
            }
            section {
                h3 { class: "text-lg font-semibold mb-4 text-gray-900 dark:text-white", "Code Example" }
                CodeBlock { code: BUTTON_CODE, show_line_numbers: true }
            }
        }
    }
}
