use dioxus::prelude::*;
use serde::Serialize;
use crate::configs::SiteConfig;
use crate::utils::sleep;

const COPY_SCRIPT: &str = r#"
    const request = await dioxus.recv();
    await navigator.clipboard.writeText(request.text);
"#;

/// Payload handed to the clipboard script.
#[derive(Debug, Serialize)]
pub struct CopyRequest<'a> {
    pub text: &'a str,
    pub language: &'a str,
}

/// Splits a sample into numbered lines, dropping one trailing newline.
pub fn numbered_lines(code: &str) -> Vec<(usize, &str)> {
    code.strip_suffix('\n')
        .unwrap_or(code)
        .split('\n')
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .collect()
}

#[component]
pub fn CodeBlock(
    #[props(into)] code: String,
    #[props(into, default = "rust".to_string())] language: String,
    #[props(default)] show_line_numbers: bool
) -> Element {
    let config = use_context::<SiteConfig>();
    let mut copied = use_signal(|| false);

    let copy = {
        let code = code.clone();
        let language = language.clone();
        move |_: MouseEvent| {
            let eval = document::eval(COPY_SCRIPT);
            let request = CopyRequest { text: &code, language: &language };
            if let Err(e) = eval.send(request) {
                log::error!("Failed to copy code sample: {:?}", e);
                return;
            }
            copied.set(true);
            let feedback = config.copy_feedback;
            spawn(async move {
                sleep(feedback).await;
                copied.set(false);
            });
        }
    };

    let lines = numbered_lines(&code);
    let gutter_width = lines.len().to_string().len();
    let rows: Vec<(usize, String, String)> = lines
        .into_iter()
        .map(|(number, line)| (number, format!("{:>width$}", number, width = gutter_width), line.to_string()))
        .collect();

    rsx! {
        div {
            class: "relative group",
            "data-language": "{language}",
            div {
                class: "absolute right-2 top-2 z-10",
                button {
                    class: "p-2 rounded-md bg-gray-800/50 hover:bg-gray-700/50 transition-colors",
                    aria_label: "Copy code",
                    onclick: copy,
                    if copied() {
                        span { class: "text-primary-500", "✓" }
                    } else {
                        span { class: "text-gray-400", "⧉" }
                    }
                }
            }
            div {
                class: "rounded-lg overflow-hidden border border-gray-200 dark:border-gray-700",
                pre {
                    class: "p-4 bg-gray-100 dark:bg-gray-800 overflow-x-auto",
                    code {
                        class: "font-mono text-sm text-gray-800 dark:text-gray-200",
                        for (number, gutter, line) in rows {
                            div {
                                key: "{number}",
                                class: "whitespace-pre",
                                if show_line_numbers {
                                    span {
                                        class: "select-none mr-4 text-gray-400 dark:text-gray-500",
                                        "{gutter}"
                                    }
                                }
                                "{line}"
                            }
                        }
                    }
                }
            }
        }
    }
}
