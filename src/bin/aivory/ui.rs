//! Ratatui rendering: sidebar, content pane, composer bar, overlays.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use aivory::lang;

use crate::app::App;
use crate::theme::ThemeColors;
use crate::theme_picker::THEME_OPTIONS;

const SIDEBAR_WIDTH: u16 = 28;

const NAV_ENTRIES: &[&str] = &["Explore", "Templates", "Directory", "History"];

const RECENT_SEARCHES: &[&str] = &[
    "Find it Fast, Procrastinate L...",
    "Search everything, even th...",
    "Get the answers, skip the c...",
    "2+2 is 4, minus one is drinki...",
];

const FEATURE_CARDS: &[(&str, &str)] = &[
    (
        "Query Response Time",
        "Faster responses improve user experience and retention.",
    ),
    (
        "Search Accuracy Rate",
        "Higher accuracy ensures users find relevant information efficiently.",
    ),
    (
        "User Query Volume",
        "Helps assess system load, user engagement, and feature adoption.",
    ),
];

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let colors = app.colors();
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(frame.size());

    draw_sidebar(frame, panes[0], app, colors);
    draw_content(frame, panes[1], app, colors);
    draw_toasts(frame, panes[1], app, colors);

    if app.picker.is_some() {
        draw_theme_picker(frame, app, colors);
    }
}

fn draw_sidebar(frame: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Aivory",
            Style::default()
                .fg(colors.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " + new chat",
            Style::default().fg(colors.accent),
        )),
        Line::from(""),
    ];
    for entry in NAV_ENTRIES {
        lines.push(Line::from(format!("   {entry}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Recent searches",
        Style::default().fg(colors.text_muted),
    )));
    for search in RECENT_SEARCHES {
        lines.push(Line::from(Span::styled(
            format!("   {search}"),
            Style::default().fg(colors.text_muted),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(" Theme "),
        Span::styled(
            format!("● {}", colors.name),
            Style::default().fg(colors.primary),
        ),
    ]));

    let sidebar = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(colors.border)),
    );
    frame.render_widget(sidebar, area);
}

fn draw_content(frame: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let upload_height = if app.show_upload {
        (app.composer.files().len() as u16).saturating_add(5)
    } else {
        0
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(upload_height),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .split(area);

    draw_header(frame, rows[0], colors);
    if app.show_upload {
        draw_upload_panel(frame, rows[1], app, colors);
    }
    draw_feature_cards(frame, rows[2], colors);
    draw_composer(frame, rows[3], app, colors);
    draw_status_line(frame, rows[4], app, colors);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "What can I help with?",
            Style::default()
                .fg(colors.gradient.0)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Here to support your ideas, coding, and beyond. What's on your mind today?",
            Style::default().fg(colors.text_muted),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_upload_panel(frame: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mut items: Vec<ListItem> = app
        .composer
        .files()
        .iter()
        .map(|file| {
            ListItem::new(Line::from(vec![
                Span::raw(file.name.clone()),
                Span::styled(
                    format!("  {}", file.size_display()),
                    Style::default().fg(colors.text_muted),
                ),
            ]))
        })
        .collect();
    items.push(ListItem::new(Line::from(vec![
        Span::styled("Path: ", Style::default().fg(colors.accent)),
        Span::raw(app.upload_input.clone()),
        Span::styled("_", Style::default().fg(colors.accent)),
    ])));

    let panel = List::new(items).block(
        Block::default()
            .title(" Upload files (max 10MB each) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.primary)),
    );
    frame.render_widget(panel, area);
}

fn draw_feature_cards(frame: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (column, (title, description)) in columns.iter().zip(FEATURE_CARDS) {
        let card = Paragraph::new(Text::from(*description))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(colors.text_muted))
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {title} "),
                        Style::default().fg(colors.primary),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.border)),
            );
        frame.render_widget(card, *column);
    }
}

fn draw_composer(frame: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let border = if app.composer.is_disabled() {
        Style::default().fg(colors.text_muted)
    } else {
        Style::default().fg(colors.primary)
    };
    let title = if app.composer.is_disabled() {
        " Waiting for reply... "
    } else {
        " Write message here... "
    };

    let mut text_lines: Vec<Line> = app
        .composer
        .text()
        .split('\n')
        .map(|line| Line::from(line.to_string()))
        .collect();
    if !app.composer.files().is_empty() {
        text_lines.push(Line::from(Span::styled(
            format!("[{} file(s) attached]", app.composer.files().len()),
            Style::default().fg(colors.accent),
        )));
    }

    let composer = Paragraph::new(Text::from(text_lines)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(composer, area);

    if !app.show_upload && app.picker.is_none() {
        let last_line = app.composer.text().split('\n').next_back().unwrap_or("");
        let cursor_x = area.x + 1 + last_line.width() as u16;
        let line_count = app.composer.text().split('\n').count() as u16;
        let cursor_y = area.y + line_count.min(area.height.saturating_sub(2));
        frame.set_cursor(cursor_x.min(area.right().saturating_sub(2)), cursor_y);
    }
}

fn draw_status_line(frame: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let voice = if app.voice.is_listening() {
        Span::styled("● listening", Style::default().fg(colors.error))
    } else if app.voice.is_speaking() {
        Span::styled("● speaking", Style::default().fg(colors.success))
    } else {
        Span::styled("● idle", Style::default().fg(colors.text_muted))
    };
    let languages = format!(
        "in {} / out {}",
        lang::display_name(app.composer.input_language()),
        lang::display_name(app.composer.output_language()),
    );
    let status = Paragraph::new(vec![
        Line::from(vec![
            voice,
            Span::raw("  "),
            Span::styled(languages, Style::default().fg(colors.text_muted)),
        ]),
        Line::from(Span::styled(
            "Enter to send, Shift + Enter for new line · Ctrl+V voice · Ctrl+U files · Ctrl+T themes · Ctrl+C quit",
            Style::default().fg(colors.text_muted),
        )),
    ]);
    frame.render_widget(status, area);
}

fn draw_toasts(frame: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let toasts: Vec<_> = app.toasts.active().collect();
    for (index, toast) in toasts.iter().rev().enumerate() {
        let text = format!(" {} {} ", toast.severity.label(), toast.message);
        let width = (text.width() as u16 + 2).min(area.width.saturating_sub(2));
        let rect = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y + 1 + (index as u16) * 3,
            width,
            height: 3,
        };
        if rect.bottom() > area.bottom() {
            break;
        }
        frame.render_widget(Clear, rect);
        let toast_widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(toast.severity.color(colors))),
        );
        frame.render_widget(toast_widget, rect);
    }
}

fn draw_theme_picker(frame: &mut Frame<'_>, app: &App, colors: &ThemeColors) {
    let Some(picker) = app.picker.as_ref() else {
        return;
    };
    let area = centered_rect(frame.size(), 44, THEME_OPTIONS.len() as u16 + 4);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = THEME_OPTIONS
        .iter()
        .enumerate()
        .map(|(index, (theme, key, description))| {
            let marker = if *theme == app.theme_store.current() {
                "*"
            } else if index == picker.selected {
                ">"
            } else {
                " "
            };
            let style = if index == picker.selected {
                Style::default()
                    .fg(theme.colors().primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.colors().primary)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {marker} ")),
                Span::styled(format!("{key:<10}"), style),
                Span::styled(
                    (*description).to_string(),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let picker_widget = List::new(items).block(
        Block::default()
            .title(" Themes · ↑↓ move · Enter select · Esc close ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.primary)),
    );
    frame.render_widget(picker_widget, area);
}

fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width.saturating_sub(width)) / 2,
        y: outer.y + (outer.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_outer() {
        let outer = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(outer, 44, 10);
        assert_eq!(rect.width, 44);
        assert_eq!(rect.height, 10);
        assert!(rect.right() <= outer.right());
        assert!(rect.bottom() <= outer.bottom());
    }

    #[test]
    fn centered_rect_clamps_to_small_terminals() {
        let outer = Rect::new(0, 0, 20, 6);
        let rect = centered_rect(outer, 44, 10);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 6);
    }

    #[test]
    fn feature_cards_match_the_shell_copy() {
        assert_eq!(FEATURE_CARDS.len(), 3);
        assert_eq!(FEATURE_CARDS[0].0, "Query Response Time");
        assert_eq!(FEATURE_CARDS[1].0, "Search Accuracy Rate");
        assert_eq!(FEATURE_CARDS[2].0, "User Query Volume");
    }
}
