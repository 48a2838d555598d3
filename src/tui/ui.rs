use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{QuoteList, TitleBar, FIELD_HEIGHT};
use crate::tui::TuiState;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Screen layout, top to bottom:
///
/// ```text
/// Dictum (quotes: 1) | Welcome to Dictum!      <- title bar
/// Add your quote                               <- form heading
/// ╭Quote──────────────────────╮
/// │ Write here the quote      │                <- quote input
/// ╰───────────────────────────╯
///   Please enter a quote                       <- quote error (or blank)
/// ╭Author─────────────────────╮
/// │ Write here the author     │                <- author input
/// ╰───────────────────────────╯
///   Please enter the author's name             <- author error (or blank)
///          [ Add quote ]                       <- submit control
/// Quotes:                                      <- list heading
/// ╭───────────────────────────╮
/// │ ...                       │                <- quote list (rest)
/// ╰───────────────────────────╯
/// Enter add  Tab switch  ...                   <- key hints (optional)
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let hints_height = if tui.show_hints { 1 } else { 0 };
    let layout = Layout::vertical([
        Length(1),            // title bar
        Length(1),            // form heading
        Length(FIELD_HEIGHT), // quote input
        Length(1),            // quote error
        Length(FIELD_HEIGHT), // author input
        Length(1),            // author error
        Length(1),            // submit control
        Length(1),            // list heading
        Min(0),               // quote list
        Length(hints_height), // key hints
    ]);
    let [
        title_area,
        form_heading_area,
        quote_area,
        quote_error_area,
        author_area,
        author_error_area,
        submit_area,
        list_heading_area,
        list_area,
        hints_area,
    ] = layout.areas(frame.area());

    TitleBar::new(app.book.len(), app.status_message.clone()).render(frame, title_area);

    frame.render_widget(
        Span::styled("Add your quote", Style::default().add_modifier(Modifier::BOLD)),
        form_heading_area,
    );

    tui.quote_input.render(frame, quote_area);
    draw_field_error(frame, quote_error_area, &app.form.quote_error);

    tui.author_input.render(frame, author_area);
    draw_field_error(frame, author_error_area, &app.form.author_error);

    draw_submit_control(frame, submit_area, tui.accent);

    frame.render_widget(
        Span::styled("Quotes:", Style::default().add_modifier(Modifier::BOLD)),
        list_heading_area,
    );

    QuoteList::new(&mut tui.quote_list, app.book.records()).render(frame, list_area);

    if tui.show_hints {
        draw_hints(frame, hints_area);
    }
}

/// One red line under a field. Inset to line up with the field text, which
/// sits behind a border and a padding column.
fn draw_field_error(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let inset = Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(2),
        ..area
    };
    frame.render_widget(Span::styled(message, Style::default().fg(Color::Red)), inset);
}

fn draw_submit_control(frame: &mut Frame, area: Rect, accent: Color) {
    use ratatui::layout::Alignment;

    let control = Paragraph::new(Line::from(Span::styled(
        "[ Add quote ]",
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(control, area);
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled("Enter", Style::default().fg(Color::DarkGray)),
        Span::raw(" add  "),
        Span::styled("Tab", Style::default().fg(Color::DarkGray)),
        Span::raw(" switch field  "),
        Span::styled("Ctrl+U", Style::default().fg(Color::DarkGray)),
        Span::raw(" clear  "),
        Span::styled("Esc", Style::default().fg(Color::DarkGray)),
        Span::raw(" quit"),
    ];
    frame.render_widget(Line::from(spans), area);
}
