use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::form;
use crate::app::App;

pub fn render(f: &mut ratatui::Frame, app: &App) {
    let state = match &app.logo_picker {
        Some(s) => s,
        None => return,
    };

    let inner = form::render_modal_frame(f, "Upload Logo", 50, 24);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    form::render_text_input(&mut lines, "Image file path", &state.path, "~/logo.png");
    lines.push(Line::from(""));
    lines.push(Line::from(""));
    form::render_footer_hint(&mut lines, "[Enter] load  [Esc] cancel");

    f.render_widget(Paragraph::new(lines), inner);
}
