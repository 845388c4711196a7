use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::format::RecipeLine;

/// Turn classified recipe lines into styled text: headings stand out, bullets
/// get a dot marker, blanks keep their spacing role.
pub(crate) fn recipe_body_text(lines: &[RecipeLine]) -> Vec<Line<'static>> {
    lines
        .iter()
        .map(|line| match line {
            RecipeLine::Blank => Line::from(""),
            RecipeLine::Heading(text) => Line::from(Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            RecipeLine::Bullet(text) => Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::Yellow)),
                Span::raw(text.clone()),
            ]),
            RecipeLine::Paragraph(text) => Line::from(text.clone()),
        })
        .collect()
}

/// Dim placeholder rows shown while a page is loading. Widths alternate so
/// the block reads as a text skeleton rather than a solid slab.
pub(crate) fn skeleton_lines(count: usize, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    (0..count)
        .map(|idx| {
            let w = match idx % 3 {
                0 => width,
                1 => width * 3 / 4,
                _ => width / 2,
            };
            Line::from(Span::styled(
                "▒".repeat(w.max(1)),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect()
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for the not-found box.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}
