pub mod alert_dialog;
pub mod button;
pub mod code_block;

pub use alert_dialog::{ AlertDialog, AlertVariant };
pub use button::{ button_class, Button, ButtonSize, ButtonVariant, IconPosition, Rounded };
pub use code_block::{ numbered_lines, CodeBlock, CopyRequest };
