use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
    Frame,
};

use crate::{
    notifier::Notifier,
    session::Session,
    util::{format_clock, format_total, short_help_line},
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

/// Text shown for the current session. Pure: reads the session, never mutates it.
pub fn session_text<N: Notifier>(session: &Session<N>) -> Text<'static> {
    let clock = format_clock(session.elapsed());

    if session.is_quitting() {
        return Text::from(Line::from(clock));
    }

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let clock_style = if session.is_running() {
        bold_style.fg(Color::Green)
    } else {
        bold_style.fg(Color::Yellow)
    };
    let dim_style = Style::default().add_modifier(Modifier::DIM);

    let mut lines = vec![Line::from(vec![
        Span::raw("Current session: "),
        Span::styled(clock, clock_style),
        Span::raw(format!(" ({}m until break)", session.minutes_until_break())),
    ])];

    if session.is_running() {
        lines.push(Line::from(Span::styled(
            format!("Session running for {}", format_total(session.total_running())),
            dim_style,
        )));
    }

    if let Some(left) = session.break_remaining() {
        lines.push(Line::from(vec![
            Span::styled(
                "Break time - Give your eyes a rest! ",
                bold_style.fg(Color::Cyan),
            ),
            Span::styled(format_clock(left), bold_style),
        ]));
    }

    if session.breaks_taken() > 0 {
        lines.push(Line::from(Span::styled(
            format!("Breaks taken: {}", session.breaks_taken()),
            Style::default().fg(Color::Magenta),
        )));
    }

    let help = session.keymap().short_help(session.is_running());
    if !help.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(short_help_line(&help), dim_style)));
    }

    Text::from(lines)
}

pub struct SessionView<'a, N: Notifier> {
    session: &'a Session<N>,
}

impl<'a, N: Notifier> SessionView<'a, N> {
    pub fn new(session: &'a Session<N>) -> Self {
        Self { session }
    }
}

impl<N: Notifier> Widget for SessionView<'_, N> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([Constraint::Min(0)])
            .split(area);

        Paragraph::new(session_text(self.session))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);
    }
}

pub fn draw<N: Notifier>(session: &Session<N>, f: &mut Frame) {
    f.render_widget(SessionView::new(session), f.area());
}
