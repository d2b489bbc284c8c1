use dioxus::prelude::*;
use crate::catalog;
use crate::views::{ AlertDialogPreview, ButtonPreview };

#[component]
pub fn ComponentPreview(name: String) -> Element {
    let entry = catalog::find(&name);
    let heading = match entry {
        Some(item) => item.name.to_string(),
        None if name.is_empty() => "Component".to_string(),
        None => catalog::capitalize(&name),
    };

    rsx! {
        div {
            class: "space-y-6",
            h2 { class: "text-2xl font-bold text-gray-900 dark:text-white", "{heading} Preview" }
            {match entry.map(|item| item.slug) {
                Some("button") => rsx! { ButtonPreview {} },
                Some("alertdialog") => rsx! { AlertDialogPreview {} },
                Some(_) => rsx! {
                    div { class: "text-gray-600 dark:text-gray-400", "A live preview for {heading} is coming soon." }
                },
                None => rsx! {
                    div { class: "text-gray-600 dark:text-gray-400", "Select a component to view its preview" }
                },
            }}
        }
    }
}
