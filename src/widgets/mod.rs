pub mod accent_entry;
pub mod confirm_reset;
pub mod details;
pub mod form;
pub mod keybindings_help;
pub mod logo_picker;
