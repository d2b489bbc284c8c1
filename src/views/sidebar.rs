use dioxus::prelude::*;
use crate::catalog::COMPONENTS;
use crate::routes::Route;

#[component]
fn ComponentLinks(active: String, on_navigate: EventHandler<()>) -> Element {
    rsx! {
        ul {
            class: "space-y-1",
            for component in COMPONENTS.iter() {
                li {
                    key: "{component.slug}",
                    Link {
                        to: Route::ComponentPreview { name: component.slug.to_string() },
                        class: if active == component.slug {
                            "block px-3 py-2 rounded-md text-sm bg-primary-500 text-white font-medium"
                        } else {
                            "block px-3 py-2 rounded-md text-sm text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800"
                        },
                        onclick: move |_| on_navigate.call(()),
                        "{component.name}"
                        if !component.has_preview {
                            span { class: "ml-2 text-xs text-gray-400 dark:text-gray-500", "soon" }
                        }
                    }
                }
            }
        }
    }
}

/// Component catalog. Fixed on desktop, an overlay on small screens while
/// `is_open` is set.
#[component]
pub fn Sidebar(#[props(default)] active: String, is_open: bool, on_close: EventHandler<()>) -> Element {
    rsx! {
        aside {
            class: "fixed left-0 top-16 w-64 h-[calc(100vh-4rem)] border-r border-gray-200 dark:border-gray-800 bg-gray-50 dark:bg-gray-950 hidden md:block z-30",
            nav {
                class: "p-4 h-full overflow-y-auto scrollbar-thin",
                h2 { class: "text-sm font-semibold text-gray-900 dark:text-white mb-4", "Components" }
                // Desktop links never close anything.
                ComponentLinks { active: active.clone(), on_navigate: move |_| {} }
            }
        }

        if is_open {
            div {
                class: "fixed inset-0 bg-black/50 z-40 md:hidden animate-fade-in",
                onclick: move |_| on_close.call(()),
            }
            aside {
                class: "fixed left-0 top-0 w-64 h-full bg-gray-50 dark:bg-slate-950 border-r border-gray-200 dark:border-gray-900 shadow-md z-50 md:hidden animate-slide-in",
                div {
                    class: "pt-16",
                    nav {
                        class: "p-4 h-full overflow-y-auto scrollbar-thin",
                        div {
                            class: "flex items-center justify-between mb-4",
                            h2 { class: "text-sm font-semibold text-gray-900 dark:text-white", "Components" }
                            button {
                                class: "p-2 rounded-md text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-800",
                                aria_label: "Close sidebar",
                                onclick: move |_| on_close.call(()),
                                "✕"
                            }
                        }
                        ComponentLinks { active: active.clone(), on_navigate: move |_| on_close.call(()) }
                    }
                }
            }
        }
    }
}
