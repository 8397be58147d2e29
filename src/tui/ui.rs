use crate::gradebook::models::LetterGrade;
use crate::gradebook::report::{format_average, format_grades};
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Roster and log
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_header(frame, chunks[0], app);
    draw_roster(frame, body[0], app);
    draw_activity_log(frame, body[1], app);
    draw_footer(frame, chunks[2], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_text = format!(
        "Students: {} | Class average: {} | Undo steps: {}",
        app.gradebook.len(),
        format_average(app.gradebook.class_average()),
        app.gradebook.undo_depth()
    );
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Gradebook"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn letter_color(letter: Option<LetterGrade>) -> Color {
    match letter {
        Some(LetterGrade::A) => Color::Green,
        Some(LetterGrade::B) => Color::LightGreen,
        Some(LetterGrade::C) => Color::Yellow,
        Some(LetterGrade::D) => Color::LightRed,
        Some(LetterGrade::F) => Color::Red,
        None => Color::DarkGray,
    }
}

fn draw_roster(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .gradebook
        .students()
        .into_iter()
        .map(|(name, grades)| {
            let letter = app.gradebook.letter_grade_for(name);
            let letter_text = letter.map_or("-", |letter| letter.as_str());

            let line = Line::from(vec![
                Span::styled(
                    format!("{:<16}", name),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>7} ", format_average(app.gradebook.average_for(name))),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:<2}", letter_text),
                    Style::default().fg(letter_color(letter)).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format_grades(grades), Style::default().fg(Color::DarkGray)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Roster"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_offset(app.navigation.scroll_offset);
    if !app.gradebook.is_empty() {
        list_state.select(Some(app.navigation.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_activity_log(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .gradebook
        .recent_log(app.log_lines)
        .into_iter()
        .map(|entry| ListItem::new(Line::from(entry.to_string())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Activity"))
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(list, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let (footer_text, color) = if let Some(prompt) = &app.edit.prompt {
        let (before_cursor, after_cursor) =
            app.edit.edit_buffer.split_at(app.edit.edit_cursor_position);
        (
            format!("{} > {}█{}", prompt.label(), before_cursor, after_cursor),
            Color::White,
        )
    } else if let Some(status) = &app.status {
        (status.clone(), Color::Green)
    } else {
        (
            "a: add student | g: add grade | d: remove | u: undo | :: command | ?: help | q: quit"
                .to_string(),
            Color::Yellow,
        )
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(color));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "Gradebook - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Select student",
        "",
        "ROSTER:",
        "  a                 Add a student",
        "  g / Enter         Add a grade to the selected student",
        "  d                 Remove the selected student",
        "  u                 Undo the last grade or removal",
        "",
        "COMMANDS (after ':'):",
        "  add <name>        grade <name> <n>   remove <name>",
        "  show <name>       avg <name>         letter <name>",
        "  class             log [n]            list    undo",
        "",
        "OTHER:",
        "  Esc               Clear status message",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
