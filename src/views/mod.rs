mod alert_dialog_preview;
mod button_preview;
mod component_preview;
mod landing;
mod layout;
mod navbar;
mod not_found;
mod sidebar;

pub use alert_dialog_preview::AlertDialogPreview;
pub use button_preview::ButtonPreview;
pub use component_preview::ComponentPreview;
pub use landing::Landing;
pub use layout::Layout;
pub use navbar::Navbar;
pub use not_found::PageNotFound;
pub use sidebar::Sidebar;
