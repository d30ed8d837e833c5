use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identity of one editable text field on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Title,
    Company,
    Email,
    Phone,
    Website,
    Linkedin,
    Twitter,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Title => "Job Title",
            Field::Company => "Company Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Website => "Website",
            Field::Linkedin => "LinkedIn Profile",
            Field::Twitter => "Twitter Handle",
        }
    }

    /// Text shown on the preview card when the field is empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Title => "Your Title",
            Field::Company => "Company Name",
            Field::Email => "email@example.com",
            Field::Phone => "+1 (555) 123-4567",
            Field::Website => "www.example.com",
            Field::Linkedin => "",
            Field::Twitter => "",
        }
    }

    /// Hint shown inside the form input when the field is empty.
    pub fn hint(&self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Title => "Senior Developer",
            Field::Company => "Tech Solutions Inc.",
            Field::Email => "john@company.com",
            Field::Phone => "+1 (555) 123-4567",
            Field::Website => "www.company.com",
            Field::Linkedin => "linkedin.com/in/username",
            Field::Twitter => "@username",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::Name | Field::Title | Field::Company | Field::Email | Field::Phone
        )
    }

    /// All text fields in form order.
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Title,
            Field::Company,
            Field::Email,
            Field::Phone,
            Field::Website,
            Field::Linkedin,
            Field::Twitter,
        ]
    }

    /// Required fields in validation order.
    pub fn required() -> &'static [Field] {
        &[
            Field::Name,
            Field::Title,
            Field::Company,
            Field::Email,
            Field::Phone,
        ]
    }
}

/// The card's accent color: a fixed palette plus a free-form hex value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    Black,
    Custom(String),
}

impl Accent {
    pub fn hex(&self) -> &str {
        match self {
            Accent::Blue => "#2563eb",
            Accent::Red => "#dc2626",
            Accent::Green => "#059669",
            Accent::Purple => "#7c3aed",
            Accent::Orange => "#ea580c",
            Accent::Black => "#0f172a",
            Accent::Custom(hex) => hex,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Accent::Blue => "Blue",
            Accent::Red => "Red",
            Accent::Green => "Green",
            Accent::Purple => "Purple",
            Accent::Orange => "Orange",
            Accent::Black => "Black",
            Accent::Custom(hex) => hex,
        }
    }

    /// The fixed palette, in display order.
    pub fn palette() -> &'static [Accent] {
        &[
            Accent::Blue,
            Accent::Red,
            Accent::Green,
            Accent::Purple,
            Accent::Orange,
            Accent::Black,
        ]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "blue" => Some(Accent::Blue),
            "red" => Some(Accent::Red),
            "green" => Some(Accent::Green),
            "purple" => Some(Accent::Purple),
            "orange" => Some(Accent::Orange),
            "black" => Some(Accent::Black),
            _ => None,
        }
    }

    /// Next palette entry, wrapping. A custom color re-enters at the start.
    pub fn next(&self) -> Accent {
        let palette = Accent::palette();
        match palette.iter().position(|a| a == self) {
            Some(idx) => palette[(idx + 1) % palette.len()].clone(),
            None => palette[0].clone(),
        }
    }

    /// Previous palette entry, wrapping. A custom color re-enters at the end.
    pub fn prev(&self) -> Accent {
        let palette = Accent::palette();
        match palette.iter().position(|a| a == self) {
            Some(idx) => palette[(idx + palette.len() - 1) % palette.len()].clone(),
            None => palette[palette.len() - 1].clone(),
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        parse_hex(self.hex()).unwrap_or((0x25, 0x63, 0xeb))
    }
}

impl Default for Accent {
    fn default() -> Self {
        Accent::Blue
    }
}

/// Parse a `#rrggbb` color value.
pub fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// An uploaded logo, stored as an embeddable data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub file_name: String,
    pub data_url: String,
    /// Size of the original file in bytes.
    pub byte_len: usize,
}

/// All user-entered card fields. Always fully defined; empty string, false,
/// and None are the defaults, never a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub linkedin: String,
    pub twitter: String,
    pub accent: Accent,
    pub logo: Option<Logo>,
    pub qr_code: bool,
}

impl Default for CardData {
    fn default() -> Self {
        Self::with_accent(Accent::default())
    }
}

impl CardData {
    pub fn with_accent(accent: Accent) -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            linkedin: String::new(),
            twitter: String::new(),
            accent,
            logo: None,
            qr_code: false,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Title => &self.title,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Website => &self.website,
            Field::Linkedin => &self.linkedin,
            Field::Twitter => &self.twitter,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Title => self.title = value,
            Field::Company => self.company = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Website => self.website = value,
            Field::Linkedin => self.linkedin = value,
            Field::Twitter => self.twitter = value,
        }
    }
}

/// Per-field validation messages; only failing fields have entries.
pub type ErrorMap = HashMap<Field, String>;

fn required_message(field: Field) -> &'static str {
    match field {
        Field::Name => "Name is required",
        Field::Title => "Title is required",
        Field::Company => "Company name is required",
        Field::Email => "Email is required",
        Field::Phone => "Phone number is required",
        _ => "",
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@` with a non-empty local
/// part, and a dot in the domain with non-empty segments on both sides.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Check required fields (in form order) and the email shape. Returns a map
/// containing only the failing fields; empty when the card is valid.
pub fn validate(card: &CardData) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in Field::required() {
        if card.get(*field).trim().is_empty() {
            errors.insert(*field, required_message(*field).to_string());
        }
    }

    if !card.email.is_empty() && !email_shape_ok(&card.email) {
        errors.insert(Field::Email, "Invalid email format".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_card() -> CardData {
        let mut card = CardData::default();
        card.name = "Jane Doe".to_string();
        card.title = "Engineer".to_string();
        card.company = "Acme".to_string();
        card.email = "jane@acme.com".to_string();
        card.phone = "+1 5551234567".to_string();
        card
    }

    #[test]
    fn defaults_are_empty_but_fully_defined() {
        let card = CardData::default();
        for field in Field::all() {
            assert_eq!(card.get(*field), "");
        }
        assert_eq!(card.accent, Accent::Blue);
        assert!(card.logo.is_none());
        assert!(!card.qr_code);
    }

    #[test]
    fn valid_card_produces_empty_error_map() {
        assert!(validate(&filled_card()).is_empty());
    }

    #[test]
    fn each_missing_required_field_is_reported_alone() {
        for field in Field::required() {
            let mut card = filled_card();
            card.set(*field, "   ".to_string());
            let errors = validate(&card);
            assert_eq!(errors.len(), 1, "expected one error for {:?}", field);
            let message = errors.get(field).expect("error for the blank field");
            assert!(!message.is_empty());
        }
    }

    #[test]
    fn whitespace_only_values_count_as_empty() {
        let mut card = filled_card();
        card.name = "\t  \n".to_string();
        assert!(validate(&card).contains_key(&Field::Name));
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let mut card = filled_card();
        card.email = "jane.acme.com".to_string();
        let errors = validate(&card);
        assert_eq!(errors.get(&Field::Email).map(String::as_str), Some("Invalid email format"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn email_without_domain_dot_is_rejected() {
        let mut card = filled_card();
        card.email = "jane@acme".to_string();
        assert_eq!(
            validate(&card).get(&Field::Email).map(String::as_str),
            Some("Invalid email format")
        );
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(email_shape_ok("a@b.c"));
        assert!(email_shape_ok("jane.doe@mail.acme.com"));
        assert!(!email_shape_ok("@acme.com"));
        assert!(!email_shape_ok("jane@"));
        assert!(!email_shape_ok("jane@acme."));
        assert!(!email_shape_ok("jane@.com"));
        assert!(!email_shape_ok("jane doe@acme.com"));
        assert!(!email_shape_ok("jane@@acme.com"));
    }

    #[test]
    fn empty_email_reports_required_not_format() {
        let mut card = filled_card();
        card.email = String::new();
        let errors = validate(&card);
        assert_eq!(
            errors.get(&Field::Email).map(String::as_str),
            Some("Email is required")
        );
    }

    #[test]
    fn accent_palette_cycles_and_wraps() {
        assert_eq!(Accent::Blue.next(), Accent::Red);
        assert_eq!(Accent::Black.next(), Accent::Blue);
        assert_eq!(Accent::Blue.prev(), Accent::Black);
        assert_eq!(Accent::Custom("#123456".to_string()).next(), Accent::Blue);
        assert_eq!(Accent::Custom("#123456".to_string()).prev(), Accent::Black);
    }

    #[test]
    fn accent_hex_parses_to_rgb() {
        assert_eq!(Accent::Blue.rgb(), (0x25, 0x63, 0xeb));
        assert_eq!(Accent::Custom("#ff0080".to_string()).rgb(), (0xff, 0x00, 0x80));
    }

    #[test]
    fn parse_hex_rejects_malformed_values() {
        assert_eq!(parse_hex("#2563eb"), Some((0x25, 0x63, 0xeb)));
        assert_eq!(parse_hex("2563eb"), None);
        assert_eq!(parse_hex("#2563e"), None);
        assert_eq!(parse_hex("#2563egg"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }
}
