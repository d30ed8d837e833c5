use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::form;

pub fn render(f: &mut ratatui::Frame) {
    let inner = form::render_modal_frame(f, "Reset Form", 40, 20);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Reset all fields?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[y/Enter] reset  [n/Esc] keep editing",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
