use dioxus::prelude::*;
use crate::routes::Route;
use crate::utils::{ ScrollLock, StartTransition, ThemeCell, ThemeController };
use crate::views::{ Navbar, Sidebar };

#[component]
pub fn Layout() -> Element {
    let mut theme = use_context::<Signal<ThemeController>>();
    let driver = use_coroutine_handle::<StartTransition>();
    let route = use_route::<Route>();
    let mut sidebar_open = use_signal(|| false);

    let is_dark = theme.read().is_dark();
    let active = route.component_slug().map(str::to_string);
    let is_component_page = active.is_some();

    let scroll_lock = use_hook(ScrollLock::shared);
    use_effect(move || scroll_lock.borrow_mut().set(sidebar_open()));

    let on_toggle = move |_: ()| {
        if theme.update(|t| t.request_toggle()) {
            driver.send(StartTransition);
        }
    };

    rsx! {
        div {
            class: if is_dark {
                "min-h-screen flex flex-col bg-gray-950 transition-colors duration-500"
            } else {
                "min-h-screen flex flex-col bg-gray-50 transition-colors duration-500"
            },
            Navbar {
                is_dark: is_dark,
                on_toggle: on_toggle,
                show_menu: is_component_page,
                on_menu_toggle: move |_| {
                    let open = sidebar_open();
                    sidebar_open.set(!open);
                },
            }
            div {
                class: "flex-1 flex",
                if is_component_page {
                    Sidebar {
                        active: active.unwrap_or_default(),
                        is_open: sidebar_open(),
                        on_close: move |_| sidebar_open.set(false),
                    }
                }
                main {
                    class: if is_component_page {
                        "flex-1 md:ml-64 overflow-y-auto h-[calc(100vh-4rem)] transition-all duration-300"
                    } else {
                        "flex-1 overflow-y-auto h-[calc(100vh-4rem)] transition-all duration-300"
                    },
                    div {
                        class: if is_component_page { "max-w-7xl mx-auto p-4 md:p-6 animate-page-in" } else { "animate-page-in" },
                        Outlet::<Route> {}
                    }
                }
            }
        }
    }
}
