use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Row};
use crate::card::{Accent, Field};

fn section(lines: &mut Vec<Line>, title: &'static str) {
    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
}

fn label_style(selected: bool) -> Style {
    Style::default().fg(if selected { Color::Cyan } else { Color::DarkGray })
}

fn field_row(lines: &mut Vec<Line>, app: &App, field: Field, selected: bool) {
    let required = if field.is_required() { "*" } else { "" };
    let value = app.card.get(field);
    let editing = selected && app.editing;
    let cursor = if editing { "_" } else { "" };

    let value_span = if value.is_empty() && !editing {
        Span::styled(field.hint().to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            value.to_string(),
            Style::default().fg(Color::White).add_modifier(if selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            }),
        )
    };

    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}{}: ", field.label(), required),
            label_style(selected),
        ),
        value_span,
        Span::styled(cursor.to_string(), Style::default().fg(Color::DarkGray)),
    ]));

    if let Some(message) = app.errors.get(&field) {
        lines.push(Line::from(Span::styled(
            format!("    ⚠ {}", message),
            Style::default().fg(Color::Red),
        )));
    }
}

fn accent_row(lines: &mut Vec<Line>, app: &App, selected: bool) {
    let mut spans = vec![Span::styled("  Accent Color: ".to_string(), label_style(selected))];

    for accent in Accent::palette() {
        let (r, g, b) = accent.rgb();
        let marker = if *accent == app.card.accent { "[●]" } else { " ● " };
        spans.push(Span::styled(
            marker.to_string(),
            Style::default().fg(Color::Rgb(r, g, b)),
        ));
    }

    if let Accent::Custom(hex) = &app.card.accent {
        let (r, g, b) = app.card.accent.rgb();
        spans.push(Span::styled(
            format!(" [●] {}", hex),
            Style::default().fg(Color::Rgb(r, g, b)),
        ));
    } else {
        spans.push(Span::styled(
            format!("  {}", app.card.accent.label()),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.push(Line::from(spans));

    if selected {
        lines.push(Line::from(Span::styled(
            "    ←/→ cycle palette, c custom hex",
            Style::default().fg(Color::DarkGray),
        )));
    }
}

fn logo_row(lines: &mut Vec<Line>, app: &App, selected: bool) {
    let value = match &app.card.logo {
        Some(logo) => format!("{} ({} KB)", logo.file_name, logo.byte_len.div_ceil(1024)),
        None if app.logo_loading => "loading...".to_string(),
        None => "none".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("  Company Logo: ".to_string(), label_style(selected)),
        Span::styled(value, Style::default().fg(Color::Gray)),
    ]));

    if selected {
        lines.push(Line::from(Span::styled(
            "    Enter upload, x remove",
            Style::default().fg(Color::DarkGray),
        )));
    }
}

fn qr_row(lines: &mut Vec<Line>, app: &App, selected: bool) {
    let checked = if app.card.qr_code { "[x]" } else { "[ ]" };
    lines.push(Line::from(vec![
        Span::styled(format!("  {} ", checked), label_style(selected)),
        Span::styled(
            "Include QR Code on card".to_string(),
            Style::default().fg(if selected { Color::White } else { Color::Gray }),
        ),
    ]));
}

pub fn render(f: &mut ratatui::Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_visual_line: Option<usize> = None;

    for (idx, row) in Row::all().iter().enumerate() {
        match row {
            Row::Field(Field::Name) => section(&mut lines, "PERSONAL"),
            Row::Field(Field::Company) => section(&mut lines, "COMPANY"),
            Row::Field(Field::Email) => section(&mut lines, "CONTACT"),
            Row::Accent => section(&mut lines, "DESIGN"),
            Row::Field(Field::Linkedin) => section(&mut lines, "SOCIAL (OPTIONAL)"),
            _ => {}
        }

        let selected = idx == app.selected_row;
        if selected {
            selected_visual_line = Some(lines.len());
        }
        match row {
            Row::Field(field) => field_row(&mut lines, app, *field, selected),
            Row::Accent => accent_row(&mut lines, app, selected),
            Row::Logo => logo_row(&mut lines, app, selected),
            Row::QrCode => qr_row(&mut lines, app, selected),
        }
    }

    // Scroll to keep the focused row visible.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll_y = match selected_visual_line {
        Some(line) if line >= visible => (line - visible + 1) as u16,
        _ => 0,
    };

    let title = if app.submitting {
        " Card Details (saving...) "
    } else {
        " Card Details "
    };
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll_y, 0));
    f.render_widget(widget, area);
}
