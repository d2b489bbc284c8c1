use dioxus::prelude::*;
use crate::components::{ Button, ButtonSize, ButtonVariant, IconPosition };
use crate::routes::Route;

const REPOSITORY_URL: &str = "https://github.com";

struct Feature {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        glyph: "</>",
        title: "Modern Components",
        description: "Beautifully designed, fully accessible UI components built with Dioxus and Tailwind CSS.",
        color: "bg-primary-500",
    },
    Feature {
        glyph: "🎨",
        title: "Customizable",
        description: "Easily customize components to match your brand with our flexible theming system.",
        color: "bg-secondary-500",
    },
    Feature {
        glyph: "⚡",
        title: "Fast & Lightweight",
        description: "Optimized for performance with minimal bundle size and zero unnecessary dependencies.",
        color: "bg-warning-500",
    },
];

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            class: "min-h-screen",
            section {
                class: "py-20 px-4 text-center animate-fade-in",
                h1 {
                    class: "text-4xl md:text-5xl lg:text-6xl font-bold mb-6 text-slate-700 dark:text-white",
                    "Modern UI Components"
                }
                p {
                    class: "text-xl text-slate-600 dark:text-slate-300 max-w-2xl mx-auto mb-10",
                    "A beautiful, modern component library for Dioxus applications."
                    br {}
                    "Built with Tailwind CSS."
                }
                div {
                    class: "flex flex-wrap justify-center gap-4",
                    Link {
                        to: Route::ComponentPreview { name: "button".to_string() },
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Lg,
                            icon: "→",
                            icon_position: IconPosition::Right,
                            "Explore Components"
                        }
                    }
                    a {
                        href: REPOSITORY_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Button { variant: ButtonVariant::Secondary, size: ButtonSize::Lg, icon: "⌥", "GitHub" }
                    }
                }
            }

            section {
                class: "py-16 px-4 bg-gray-100 dark:bg-gray-900",
                h2 {
                    class: "text-3xl font-bold text-center mb-12 text-slate-600 dark:text-white",
                    "Why Choose Our Components?"
                }
                div {
                    class: "max-w-6xl mx-auto grid md:grid-cols-3 gap-8",
                    for feature in FEATURES.iter() {
                        div {
                            key: "{feature.title}",
                            class: "{feature.color} p-6 rounded-lg shadow-sm text-white",
                            div { class: "mb-4 text-2xl", "{feature.glyph}" }
                            h3 { class: "text-xl font-semibold mb-2", "{feature.title}" }
                            p { class: "text-white/90", "{feature.description}" }
                        }
                    }
                }
            }

            section {
                class: "py-20 px-4 text-center",
                h2 {
                    class: "text-3xl font-bold mb-6 text-slate-900 dark:text-white",
                    "Ready to Build Beautiful UIs?"
                }
                p {
                    class: "text-xl text-slate-600 dark:text-slate-300 max-w-2xl mx-auto mb-10",
                    "Get started with our component library today and create stunning user interfaces in no time."
                }
                Link {
                    to: Route::ComponentPreview { name: "button".to_string() },
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Lg,
                        icon: "→",
                        icon_position: IconPosition::Right,
                        "Get Started"
                    }
                }
            }
        }
    }
}
