use dioxus::prelude::*;
use crate::views::{ ComponentPreview, Landing, Layout, PageNotFound };

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Landing {},
        #[nest("/components")]
            #[route("/:name")]
            ComponentPreview { name: String },
        #[end_nest]
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Catalog slug of the component page this route shows, if any.
    pub fn component_slug(&self) -> Option<&str> {
        match self {
            Route::ComponentPreview { name } => Some(name.as_str()),
            _ => None,
        }
    }
}
