use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::card::{CardData, Field};
use crate::widgets;

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let t: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", t)
    } else {
        s.to_string()
    }
}

fn accent_color(card: &CardData) -> Color {
    let (r, g, b) = card.accent.rgb();
    Color::Rgb(r, g, b)
}

fn field_or_placeholder(card: &CardData, field: Field) -> &str {
    let value = card.get(field);
    if value.is_empty() {
        field.placeholder()
    } else {
        value
    }
}

/// The accent-colored left border of the card.
fn bar(accent: Color) -> Span<'static> {
    Span::styled("▌ ".to_string(), Style::default().fg(accent))
}

/// Project the card data onto preview lines. Pure: depends on the card and
/// the available width only, never on errors or submission state.
pub fn card_lines(card: &CardData, width: u16) -> Vec<Line<'static>> {
    let accent = accent_color(card);
    let text_w = width.saturating_sub(4).max(16) as usize;
    let mut lines: Vec<Line> = Vec::new();

    // Header: logo or monogram tile, then the company name.
    let tile = match &card.logo {
        Some(logo) => Span::styled(
            format!("[{} ({} KB)]", logo.file_name, logo.byte_len.div_ceil(1024)),
            Style::default().fg(accent),
        ),
        None => {
            let company = field_or_placeholder(card, Field::Company);
            let initial = company.chars().next().unwrap_or('?').to_ascii_uppercase();
            Span::styled(
                format!(" {} ", initial),
                Style::default().fg(Color::White).bg(accent),
            )
        }
    };
    lines.push(Line::from(vec![bar(accent), tile]));
    lines.push(Line::from(vec![
        bar(accent),
        Span::styled(
            truncate(field_or_placeholder(card, Field::Company), text_w),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(bar(accent)));

    // Personal info.
    lines.push(Line::from(vec![
        bar(accent),
        Span::styled(
            truncate(field_or_placeholder(card, Field::Name), text_w),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        bar(accent),
        Span::raw(truncate(field_or_placeholder(card, Field::Title), text_w)),
    ]));
    lines.push(Line::from(bar(accent)));

    // Contact info.
    for (icon, field) in [
        ("✉", Field::Email),
        ("☎", Field::Phone),
        ("⊕", Field::Website),
    ] {
        lines.push(Line::from(vec![
            bar(accent),
            Span::styled(
                format!("{} {}", icon, truncate(field_or_placeholder(card, field), text_w)),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    // Social indicators, only for non-empty fields.
    if !card.linkedin.is_empty() || !card.twitter.is_empty() {
        lines.push(Line::from(vec![
            bar(accent),
            Span::styled(
                "─".repeat(text_w.min(24)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        let mut spans = vec![bar(accent)];
        if !card.linkedin.is_empty() {
            spans.push(Span::styled(
                "⛓ LinkedIn  ".to_string(),
                Style::default().fg(Color::Gray),
            ));
        }
        if !card.twitter.is_empty() {
            spans.push(Span::styled(
                "⛓ Twitter".to_string(),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::from(spans));
    }

    // QR indicator.
    if card.qr_code {
        lines.push(Line::from(bar(accent)));
        lines.push(Line::from(vec![
            bar(accent),
            Span::styled(
                "▦ QR".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines
}

pub fn render(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let (card_area, details_area) = if app.show_details {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(9)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let block = Block::default().borders(Borders::ALL).title(" Card Preview ");
    let inner = block.inner(card_area);
    f.render_widget(block, card_area);

    let mut lines = vec![Line::from("")];
    lines.extend(card_lines(&app.card, inner.width));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Live updates as you type",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), inner);

    if let Some(details_area) = details_area {
        widgets::details::render(f, details_area, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Accent, CardData, Logo};

    fn flatten(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_card_shows_exactly_the_documented_placeholders() {
        let text = flatten(&card_lines(&CardData::default(), 60));
        assert!(text.contains("Your Name"));
        assert!(text.contains("Your Title"));
        assert!(text.contains("Company Name"));
        assert!(text.contains("email@example.com"));
        assert!(text.contains("+1 (555) 123-4567"));
        assert!(text.contains("www.example.com"));
        assert!(!text.contains("LinkedIn"));
        assert!(!text.contains("Twitter"));
        assert!(!text.contains("QR"));
    }

    #[test]
    fn stored_values_replace_placeholders() {
        let mut card = CardData::default();
        card.name = "Jane Doe".to_string();
        card.company = "Acme".to_string();
        let text = flatten(&card_lines(&card, 60));
        assert!(text.contains("Jane Doe"));
        assert!(!text.contains("Your Name"));
        assert!(text.contains("Acme"));
        assert!(!text.contains("Company Name"));
    }

    #[test]
    fn social_indicators_follow_non_empty_fields() {
        let mut card = CardData::default();
        card.linkedin = "linkedin.com/in/jane".to_string();
        let text = flatten(&card_lines(&card, 60));
        assert!(text.contains("LinkedIn"));
        assert!(!text.contains("Twitter"));

        card.twitter = "@jane".to_string();
        let text = flatten(&card_lines(&card, 60));
        assert!(text.contains("LinkedIn"));
        assert!(text.contains("Twitter"));
    }

    #[test]
    fn qr_indicator_follows_the_flag() {
        let mut card = CardData::default();
        assert!(!flatten(&card_lines(&card, 60)).contains("QR"));
        card.qr_code = true;
        assert!(flatten(&card_lines(&card, 60)).contains("QR"));
    }

    #[test]
    fn monogram_tile_gives_way_to_logo_tile() {
        let mut card = CardData::default();
        card.company = "Acme".to_string();
        assert!(flatten(&card_lines(&card, 60)).contains(" A "));

        card.logo = Some(Logo {
            file_name: "tile.png".to_string(),
            data_url: "data:image/png;base64,YWJj".to_string(),
            byte_len: 2048,
        });
        let text = flatten(&card_lines(&card, 60));
        assert!(text.contains("tile.png (2 KB)"));
        assert!(!text.contains(" A "));
    }

    #[test]
    fn rendering_is_idempotent_and_reset_round_trips() {
        let mut card = CardData::default();
        card.name = "Jane".to_string();
        card.accent = Accent::Red;
        card.qr_code = true;

        // reset -> render -> reset -> render matches a fresh record both times.
        card = CardData::default();
        let first = card_lines(&card, 60);
        card.name = "Bob".to_string();
        card = CardData::default();
        let second = card_lines(&card, 60);
        assert_eq!(first, second);
        assert_eq!(second, card_lines(&CardData::default(), 60));
    }

    #[test]
    fn long_values_are_truncated_to_the_width() {
        let mut card = CardData::default();
        card.name = "N".repeat(200);
        let text = flatten(&card_lines(&card, 40));
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap();
        assert!(longest <= 60, "line too long: {}", longest);
        assert!(text.contains("..."));
    }
}
