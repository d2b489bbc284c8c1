use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::warn!("No page for {}", path);

    rsx! {
        div {
            class: "container mx-auto p-4 py-20 text-center",
            h1 { class: "text-2xl font-bold mb-4 text-gray-900 dark:text-white", "Page not found" }
            p {
                class: "text-gray-600 dark:text-gray-400 mb-6",
                "Nothing lives at "
                code { class: "font-mono", "{path}" }
            }
            Link { class: "text-primary-500 hover:underline", to: Route::Landing {}, "Back home" }
        }
    }
}
