use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::form;

pub fn render(f: &mut ratatui::Frame) {
    let inner = form::render_modal_frame(f, "Keybindings", 56, 66);

    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled("Navigation", heading)),
        Line::from("  j / k or Up / Down: move between fields"),
        Line::from("  Tab: next field (wraps around)"),
        Line::from("  Enter: edit the focused text field"),
        Line::from("  (while editing) Enter or Esc: stop editing"),
        Line::from(""),
        Line::from(Span::styled("Design", heading)),
        Line::from("  Left / Right: cycle the accent palette"),
        Line::from("  c: enter a custom hex accent"),
        Line::from("  Enter (on logo row): upload a logo file"),
        Line::from("  x (on logo row): remove the logo"),
        Line::from("  Space (on QR row): toggle the QR code"),
        Line::from(""),
        Line::from(Span::styled("Actions", heading)),
        Line::from("  s: save the visiting card"),
        Line::from("  R: reset the form (asks to confirm)"),
        Line::from("  d: toggle the card information panel"),
        Line::from("  q: quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
