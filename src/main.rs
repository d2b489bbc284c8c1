use dioxus::prelude::*;
use futures::StreamExt;
use aabha_docs::utils::{
    drive_transition,
    platform_store,
    sleep,
    DocumentRoot,
    StartTransition,
    ThemeController,
};
use aabha_docs::{ Route, SiteConfig };

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger already set: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::from_env);
    let theme = use_signal(|| {
        ThemeController::initialize(platform_store(&config), Box::new(DocumentRoot), &config)
    });
    use_context_provider(|| theme);

    // Lives as long as the app, so page changes never cancel a running fade.
    use_coroutine(move |mut rx: UnboundedReceiver<StartTransition>| async move {
        while rx.next().await.is_some() {
            drive_transition(theme, sleep).await;
        }
    });

    let state = theme.read().state();

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div {
            class: if state.is_dark { "dark" } else { "" },
            div {
                class: if state.is_transitioning {
                    "transition-all duration-300 brightness-110 saturate-110"
                } else {
                    "transition-all duration-300 brightness-100 saturate-100"
                },
                Router::<Route> {}
            }
        }
    }
}
