use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::card::Field;

/// Raw stored values of the required fields, shown under the preview when the
/// details toggle is on. Unlike the preview card, this reads values verbatim.
pub fn render(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Card Information ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for field in Field::required() {
        let value = app.card.get(*field);
        let value_span = if value.is_empty() {
            Span::styled("Not set", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                value.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<14}", format!("{}:", field.label())),
                Style::default().fg(Color::Gray),
            ),
            value_span,
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
