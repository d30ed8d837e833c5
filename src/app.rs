use std::path::PathBuf;

use crate::card::{self, Accent, CardData, ErrorMap, Field, Logo};
use crate::config::AppConfig;

/// Which page is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Editor,
}

/// One focusable row in the editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Field(Field),
    Accent,
    Logo,
    QrCode,
}

impl Row {
    /// All rows in form order: personal, company, contact, design, social.
    pub fn all() -> &'static [Row] {
        &[
            Row::Field(Field::Name),
            Row::Field(Field::Title),
            Row::Field(Field::Company),
            Row::Field(Field::Email),
            Row::Field(Field::Phone),
            Row::Field(Field::Website),
            Row::Accent,
            Row::Logo,
            Row::QrCode,
            Row::Field(Field::Linkedin),
            Row::Field(Field::Twitter),
        ]
    }
}

/// State for the logo path modal.
#[derive(Debug, Clone, Default)]
pub struct LogoPickerState {
    pub path: String,
}

/// State for the free-form accent hex modal.
#[derive(Debug, Clone, Default)]
pub struct AccentEntryState {
    pub hex: String,
}

/// Full application state.
pub struct App {
    pub config: AppConfig,
    /// The card being edited; the preview derives from this and nothing else.
    pub card: CardData,
    /// Validation messages for fields currently failing validation.
    pub errors: ErrorMap,
    /// Whole-form save failure banner; persists until the next successful save.
    pub form_error: Option<String>,
    pub screen: Screen,
    /// Index into `Row::all()` of the focused form row.
    pub selected_row: usize,
    /// True while a text field is in inline edit mode.
    pub editing: bool,
    /// True while a save is in flight.
    pub submitting: bool,
    /// True while a logo file read is in flight.
    pub logo_loading: bool,
    /// Whether the raw-values details panel is visible.
    pub show_details: bool,
    pub show_keybindings: bool,
    /// Flash message (error or success), cleared on next keypress.
    pub flash: Option<String>,
    pub logo_picker: Option<LogoPickerState>,
    pub accent_entry: Option<AccentEntryState>,
    /// True while the reset confirmation prompt is open.
    pub confirm_reset: bool,
    pub should_quit: bool,
    default_accent: Accent,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let default_accent = config.default_accent();
        Self {
            config,
            card: CardData::with_accent(default_accent.clone()),
            errors: ErrorMap::new(),
            form_error: None,
            screen: Screen::Landing,
            selected_row: 0,
            editing: false,
            submitting: false,
            logo_loading: false,
            show_details: false,
            show_keybindings: false,
            flash: None,
            logo_picker: None,
            accent_entry: None,
            confirm_reset: false,
            should_quit: false,
            default_accent,
        }
    }

    pub fn selected_row_kind(&self) -> Row {
        Row::all()[self.selected_row]
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_row + 1 < Row::all().len() {
            self.selected_row += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Tab order wraps around.
    pub fn next_row(&mut self) {
        self.selected_row = (self.selected_row + 1) % Row::all().len();
    }

    /// Replace one field's value and drop its error entry; other entries stay.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.card.set(field, value);
        self.errors.remove(&field);
    }

    /// Append a character to the focused text field (inline edit mode).
    pub fn push_char(&mut self, c: char) {
        if let Row::Field(field) = self.selected_row_kind() {
            let mut value = self.card.get(field).to_string();
            value.push(c);
            self.set_field(field, value);
        }
    }

    /// Remove the last character of the focused text field.
    pub fn pop_char(&mut self) {
        if let Row::Field(field) = self.selected_row_kind() {
            let mut value = self.card.get(field).to_string();
            value.pop();
            self.set_field(field, value);
        }
    }

    pub fn cycle_accent_next(&mut self) {
        self.card.accent = self.card.accent.next();
    }

    pub fn cycle_accent_prev(&mut self) {
        self.card.accent = self.card.accent.prev();
    }

    pub fn set_custom_accent(&mut self, hex: String) -> bool {
        if card::parse_hex(&hex).is_none() {
            return false;
        }
        self.card.accent = Accent::Custom(hex);
        true
    }

    pub fn toggle_qr(&mut self) {
        self.card.qr_code = !self.card.qr_code;
    }

    pub fn set_logo(&mut self, logo: Logo) {
        self.card.logo = Some(logo);
    }

    pub fn clear_logo(&mut self) {
        self.card.logo = None;
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }

    pub fn toggle_keybindings(&mut self) {
        self.show_keybindings = !self.show_keybindings;
    }

    pub fn close_keybindings(&mut self) {
        self.show_keybindings = false;
    }

    pub fn is_logo_picker_open(&self) -> bool {
        self.logo_picker.is_some()
    }

    pub fn is_accent_entry_open(&self) -> bool {
        self.accent_entry.is_some()
    }

    /// Restore every field to its default and clear all errors. Callers go
    /// through the confirmation prompt first.
    pub fn reset_all(&mut self) {
        self.card = CardData::with_accent(self.default_accent.clone());
        self.errors.clear();
        self.form_error = None;
        self.editing = false;
    }

    /// Validate the card. On failure, store the error map and abort; the save
    /// task is spawned by the caller only when this returns true.
    pub fn begin_submit(&mut self) -> bool {
        let errors = card::validate(&self.card);
        if !errors.is_empty() {
            let count = errors.len();
            self.errors = errors;
            self.flash = Some(format!(
                "Cannot save: {} field{} need attention",
                count,
                if count == 1 { "" } else { "s" }
            ));
            return false;
        }
        self.errors.clear();
        self.submitting = true;
        true
    }

    pub fn finish_submit(&mut self, result: Result<PathBuf, String>) {
        self.submitting = false;
        match result {
            Ok(path) => {
                self.form_error = None;
                self.flash = Some(format!("Visiting card saved to {}", path.display()));
            }
            Err(_) => {
                self.form_error = Some("Failed to save. Please try again.".to_string());
            }
        }
    }

    /// An unreadable logo file leaves the stored logo untouched.
    pub fn finish_logo_load(&mut self, result: Result<Logo, String>) {
        self.logo_loading = false;
        match result {
            Ok(logo) => {
                let kb = logo.byte_len.div_ceil(1024);
                self.flash = Some(format!("Logo loaded: {} ({} KB)", logo.file_name, kb));
                self.set_logo(logo);
            }
            Err(e) => {
                self.flash = Some(format!("Logo load failed: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::validate;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn filled_app() -> App {
        let mut app = app();
        app.set_field(Field::Name, "Jane Doe".to_string());
        app.set_field(Field::Title, "Engineer".to_string());
        app.set_field(Field::Company, "Acme".to_string());
        app.set_field(Field::Email, "jane@acme.com".to_string());
        app.set_field(Field::Phone, "+1 5551234567".to_string());
        app
    }

    #[test]
    fn set_field_clears_only_that_fields_error() {
        let mut app = app();
        app.errors = validate(&app.card);
        assert!(app.errors.contains_key(&Field::Name));
        assert!(app.errors.contains_key(&Field::Email));

        let before = app.errors.len();
        app.set_field(Field::Name, "Jane".to_string());
        assert!(!app.errors.contains_key(&Field::Name));
        assert_eq!(app.errors.len(), before - 1);
        assert!(app.errors.contains_key(&Field::Email));
    }

    #[test]
    fn push_and_pop_char_edit_the_focused_field() {
        let mut app = app();
        app.selected_row = 0; // Name
        app.push_char('J');
        app.push_char('o');
        assert_eq!(app.card.name, "Jo");
        app.pop_char();
        assert_eq!(app.card.name, "J");
    }

    #[test]
    fn typing_into_an_errored_field_clears_the_error() {
        let mut app = app();
        app.errors = validate(&app.card);
        app.selected_row = 0; // Name
        app.push_char('J');
        assert!(!app.errors.contains_key(&Field::Name));
        assert!(app.errors.contains_key(&Field::Title));
    }

    #[test]
    fn begin_submit_aborts_and_records_errors_when_invalid() {
        let mut app = app();
        assert!(!app.begin_submit());
        assert!(!app.submitting);
        for field in Field::required() {
            assert!(app.errors.contains_key(field), "missing error for {:?}", field);
        }
    }

    #[test]
    fn begin_submit_sets_submitting_when_valid() {
        let mut app = filled_app();
        assert!(app.begin_submit());
        assert!(app.submitting);
        assert!(app.errors.is_empty());
    }

    #[test]
    fn save_failure_sets_whole_form_error_and_success_clears_it() {
        let mut app = filled_app();
        assert!(app.begin_submit());
        app.finish_submit(Err("disk full".to_string()));
        assert!(!app.submitting);
        assert_eq!(
            app.form_error.as_deref(),
            Some("Failed to save. Please try again.")
        );

        assert!(app.begin_submit());
        app.finish_submit(Ok(PathBuf::from("/tmp/card.json")));
        assert!(app.form_error.is_none());
    }

    #[test]
    fn reset_all_restores_defaults_and_clears_errors() {
        let mut app = filled_app();
        app.card.qr_code = true;
        app.card.accent = Accent::Red;
        app.card.logo = Some(Logo {
            file_name: "logo.png".to_string(),
            data_url: "data:image/png;base64,AAAA".to_string(),
            byte_len: 3,
        });
        app.errors = validate(&CardData::default());
        app.form_error = Some("Failed to save. Please try again.".to_string());

        app.reset_all();
        assert_eq!(app.card, CardData::default());
        assert!(app.errors.is_empty());
        assert!(app.form_error.is_none());
    }

    #[test]
    fn reset_all_keeps_configured_default_accent() {
        let mut config = AppConfig::default();
        config.card.default_accent = "green".to_string();
        let mut app = App::new(config);
        assert_eq!(app.card.accent, Accent::Green);
        app.cycle_accent_next();
        app.reset_all();
        assert_eq!(app.card.accent, Accent::Green);
    }

    #[test]
    fn failed_logo_load_leaves_existing_logo_unchanged() {
        let mut app = app();
        let logo = Logo {
            file_name: "logo.png".to_string(),
            data_url: "data:image/png;base64,AAAA".to_string(),
            byte_len: 3,
        };
        app.set_logo(logo.clone());
        app.finish_logo_load(Err("no such file".to_string()));
        assert_eq!(app.card.logo, Some(logo));
        assert!(app.errors.is_empty());
        assert!(app.flash.is_some());
    }

    #[test]
    fn custom_accent_requires_a_valid_hex_value() {
        let mut app = app();
        assert!(!app.set_custom_accent("purple".to_string()));
        assert_eq!(app.card.accent, Accent::Blue);
        assert!(app.set_custom_accent("#1a2b3c".to_string()));
        assert_eq!(app.card.accent, Accent::Custom("#1a2b3c".to_string()));
    }

    #[test]
    fn tab_order_wraps_and_arrows_clamp() {
        let mut app = app();
        for _ in 0..Row::all().len() {
            app.next_row();
        }
        assert_eq!(app.selected_row, 0);

        app.move_selection_up();
        assert_eq!(app.selected_row, 0);
        app.selected_row = Row::all().len() - 1;
        app.move_selection_down();
        assert_eq!(app.selected_row, Row::all().len() - 1);
    }
}
