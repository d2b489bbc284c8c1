/// One entry in the component sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentItem {
    pub name: &'static str,
    pub slug: &'static str,
    /// Whether a live preview page exists yet.
    pub has_preview: bool,
}

const fn item(name: &'static str, slug: &'static str, has_preview: bool) -> ComponentItem {
    ComponentItem { name, slug, has_preview }
}

pub const COMPONENTS: &[ComponentItem] = &[
    item("Button", "button", true),
    item("AlertDialog", "alertdialog", true),
    item("Card", "card", false),
    item("Checkbox", "checkbox", false),
    item("Dropdown", "dropdown", false),
    item("Input", "input", false),
    item("Modal", "modal", false),
    item("Pagination", "pagination", false),
    item("Progress", "progress", false),
    item("Radio", "radio", false),
    item("Select", "select", false),
    item("Slider", "slider", false),
    item("Switch", "switch", false),
    item("Tabs", "tabs", false),
    item("Toast", "toast", false),
    item("Tooltip", "tooltip", false),
];

pub fn find(slug: &str) -> Option<&'static ComponentItem> {
    COMPONENTS.iter().find(|c| c.slug.eq_ignore_ascii_case(slug))
}

/// First letter upper-cased, for headings built from a raw slug.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
