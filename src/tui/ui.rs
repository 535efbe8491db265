use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table};

use crate::roster::Score;
use crate::tui::app::{App, InputMode};
use crate::tui::theme::ThemeColors;

const BAR_WIDTH: usize = 10;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background).fg(app.theme.text)),
        area,
    );

    // Handle very small terminal sizes gracefully
    if area.height < 6 || area.width < 30 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Table(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Fill(1),   // Roster table
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_table(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    match app.input_mode {
        InputMode::PathInput => render_path_popup(frame, app),
        InputMode::Help => render_help_popup(frame, &app.theme),
        InputMode::Normal | InputMode::Editing => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let left = "Roster";
    let mut spans = vec![Span::styled(left, Style::default().fg(theme.title_color).bold())];

    let mut right = format!(
        "{} selected / {} | a: {} | t: {}",
        app.roster.selection().len(),
        app.roster.store().len(),
        app.roster.select_all_label(),
        app.theme_mode.toggle_label(),
    );
    if app.is_loading {
        // Braille spinner animation
        let spinner_chars = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        right = format!("{} Loading names... | {}", spinner_chars[app.spinner_frame % 10], right);
    }

    let padding_len = (area.width as usize).saturating_sub(left.len() + right.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(right, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;

    if app.view.is_empty() {
        let empty_msg = Paragraph::new("No names loaded. Press 'l' to reload or 'o' to open a file.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted));
        frame.render_widget(empty_msg, area);
        return;
    }

    let now = Instant::now();
    let editing = app.edit.editing_name();

    let rows: Vec<Row> = app
        .view
        .rows()
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let selected = app.roster.selection().contains(&row.name);
            let marker = if selected { "●" } else { " " };
            let tier_color = theme.tier_color(row.tier);

            let score_cell = if editing == Some(row.name.as_str()) {
                let buffer = app.edit.buffer().unwrap_or_default();
                Cell::from(Line::from(Span::styled(format!("{}|", buffer), theme.edit_style)))
            } else {
                let mut style = Style::default().fg(tier_color);
                if row.is_pulsing(now) {
                    style = style.bold().reversed();
                }
                let mut spans = vec![Span::styled(format!("{:>4} ", row.score.to_string()), style)];
                spans.extend(score_bar(row.score, tier_color, theme).spans);
                Cell::from(Line::from(spans))
            };

            // Alternating row background (odd rows get subtle background)
            let row_style = if idx % 2 == 1 {
                Style::default().bg(theme.row_alt_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(marker).style(Style::default().fg(theme.selected_marker)),
                Cell::from(row.name.clone()),
                score_cell,
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),  // Selection marker
        Constraint::Fill(1),    // Name
        Constraint::Length(16), // Score + bar: "10.0 ██████████"
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["", "Name", "Score"])
                .style(theme.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(theme.row_cursor);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Error") {
            theme.flash_error
        } else if msg.starts_with("Loaded") || msg.starts_with("All scores") {
            theme.flash_success
        } else {
            theme.text
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.input_mode {
            InputMode::Editing => &[("Enter", ":save "), ("Esc", ":cancel")],
            InputMode::PathInput => &[("Enter", ":load "), ("Esc", ":cancel")],
            InputMode::Normal | InputMode::Help => &[
                ("Up/Down", ":all/sel +- "),
                ("+/-", ":row "),
                ("Space", ":select "),
                ("Enter", ":edit "),
                ("o", ":open "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}

fn score_bar(score: Score, color: Color, theme: &ThemeColors) -> Line<'static> {
    let ratio = (score.value() / Score::MAX.value()).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(color)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(theme.bar_empty)));
    }

    Line::from(spans)
}

/// Render the local file path popup
fn render_path_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(50, 5, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Open name list ")
        .border_style(Style::default().fg(app.theme.popup_border))
        .style(Style::default().bg(app.theme.popup_bg));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Input line
        Constraint::Length(1), // Help text
    ])
    .split(inner);

    let input = Paragraph::new(format!("{}|", app.path_input));
    frame.render_widget(input, chunks[0]);

    let help = Paragraph::new(".txt: one name per line | .json: array")
        .style(Style::default().fg(app.theme.muted));
    frame.render_widget(help, chunks[1]);
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, theme: &ThemeColors) {
    const SHORTCUTS: [(&str, &str); 17] = [
        ("Up / Down     ", "+0.1 / -0.1 on selection (or everyone)"),
        ("j / k         ", "Move cursor"),
        ("+ / -         ", "+0.1 / -0.1 on selection (or cursor row)"),
        ("r             ", "Reset selection (or cursor row) to 10"),
        ("1 / 5 / 0     ", "Reset selection (or everyone) to 10/5/0"),
        ("R / M / Z     ", "Reset everyone to 10/5/0"),
        ("Space         ", "Toggle row selection"),
        ("s             ", "Select only this row"),
        ("a             ", "Select all / deselect all"),
        ("Esc           ", "Clear selection"),
        ("Enter / e     ", "Edit score (Enter saves, Esc cancels)"),
        ("l             ", "Reload configured name list"),
        ("o             ", "Open a local name list"),
        ("t             ", "Toggle dark/light theme"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
        ("", ""),
    ];

    let popup_area = centered_rect_fixed(62, SHORTCUTS.len() as u16 + 3, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .border_style(Style::default().fg(theme.popup_border))
        .style(Style::default().bg(theme.popup_bg));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let mut help_lines: Vec<Line> = SHORTCUTS
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(*keys, Style::default().fg(theme.status_key_color).bold()),
                Span::raw(*action),
            ])
        })
        .collect();
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}
