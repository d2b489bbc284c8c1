use std::time::Duration;
use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::sleep;

const RIPPLE: Duration = Duration::from_millis(600);

#[component(no_case_check)]
pub fn Navbar(
    is_dark: bool,
    on_toggle: EventHandler<()>,
    #[props(default)] show_menu: bool,
    on_menu_toggle: EventHandler<()>
) -> Element {
    let mut rippling = use_signal(|| false);

    let toggle = move |evt: MouseEvent| {
        evt.prevent_default();
        log::debug!("Theme toggle clicked, currently dark={}", is_dark);
        on_toggle.call(());
        rippling.set(true);
        spawn(async move {
            sleep(RIPPLE).await;
            rippling.set(false);
        });
    };

    rsx! {
        nav {
            class: "sticky top-0 left-0 right-0 h-16 border-b border-gray-200 dark:border-gray-800 bg-gray-50/80 dark:bg-gray-950/80 backdrop-blur-md z-50 shadow-sm transition-colors duration-300",
            div {
                id: "navbar",
                class: "h-full px-4 flex items-center justify-between",
                div {
                    class: "flex items-center",
                    if show_menu {
                        button {
                            class: "mr-3 p-2 rounded-md text-gray-500 hover:bg-gray-100 dark:hover:bg-gray-800 md:hidden",
                            aria_label: "Toggle menu",
                            onclick: move |_| on_menu_toggle.call(()),
                            "☰"
                        }
                    }
                    Link {
                        class: "flex items-center space-x-2 cursor-pointer",
                        to: Route::Landing {},
                        img { class: "w-8 h-8 logo", src: asset!("/assets/logo.svg"), alt: "logo" }
                        h1 {
                            class: "font-black text-4xl font-sans bg-gradient-to-r from-primary-500 to-secondary-500 inline-block text-transparent bg-clip-text",
                            "AABHA"
                        }
                    }
                }
                button {
                    class: if is_dark {
                        "p-2 rounded-md hover:bg-gray-800 relative overflow-hidden transition-colors"
                    } else {
                        "p-2 rounded-md hover:bg-gray-100 relative overflow-hidden transition-colors"
                    },
                    r#type: "button",
                    aria_label: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
                    "data-theme-mode": if is_dark { "dark" } else { "light" },
                    onclick: toggle,
                    span {
                        class: "inline-block animate-icon-swap",
                        if is_dark {
                            span { class: "text-primary-500", "🌙" }
                        } else {
                            span { class: "text-warning-500", "🌞" }
                        }
                    }
                    if rippling() {
                        span {
                            class: if is_dark {
                                "absolute inset-0 rounded-full bg-warning-500/20 animate-ripple"
                            } else {
                                "absolute inset-0 rounded-full bg-primary-500/20 animate-ripple"
                            },
                        }
                    }
                }
            }
        }
    }
}
