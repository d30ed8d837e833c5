use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::form;
use crate::app::App;

pub fn render(f: &mut ratatui::Frame, app: &App) {
    let state = match &app.accent_entry {
        Some(s) => s,
        None => return,
    };

    let inner = form::render_modal_frame(f, "Custom Accent Color", 40, 24);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    form::render_text_input(&mut lines, "Hex value", &state.hex, "#2563eb");
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    form::render_footer_hint(&mut lines, "[Enter] apply  [Esc] cancel");

    f.render_widget(Paragraph::new(lines), inner);
}
