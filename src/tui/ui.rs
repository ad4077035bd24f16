//! UI rendering for the timer screen.

use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame, Terminal,
};

use crate::error::PomodoroError;
use crate::stats::{render_sparkline, StatsSummary};
use crate::timer::SessionKind;
use crate::tui::app::{Renderer, View};
use crate::tui::event::{PROMPT_HELP, TIMER_HELP};

/// Draws views to a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wrap a terminal.
    pub const fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    /// Access the underlying terminal.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw(&mut self, view: &View) -> Result<(), PomodoroError> {
        self.terminal
            .draw(|frame| render(frame, view))
            .map_err(|e| PomodoroError::Terminal(format!("Failed to draw: {e}")))?;
        Ok(())
    }
}

const fn session_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Work => Color::Red,
        SessionKind::ShortBreak => Color::Green,
        SessionKind::LongBreak => Color::Cyan,
    }
}

/// Render the timer screen.
pub fn render(frame: &mut Frame<'_>, view: &View) {
    let stats_height = if view.stats.is_some() { 7 } else { 0 };

    // Header, timer, progress, stats panel, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(stats_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    render_timer(frame, view, chunks[1]);
    render_progress(frame, view, chunks[2]);
    if let Some(ref stats) = view.stats {
        render_stats(frame, stats, chunks[3]);
    }
    render_status_bar(frame, view, chunks[4]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, view: &View, area: Rect) {
    let color = session_color(view.snapshot.session);
    let title = format!(" Pomodoro Timer - {} ", view.snapshot.session);

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the countdown, or the session-end choices.
fn render_timer(frame: &mut Frame<'_>, view: &View, area: Rect) {
    let snapshot = &view.snapshot;
    let color = session_color(snapshot.session);

    let lines = if snapshot.awaiting_next {
        vec![
            Line::from(Span::styled(
                format!("Next session: {}", snapshot.session),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Enter - Start next session"),
            Line::from("s     - Skip next session"),
            Line::from("q     - Quit"),
        ]
    } else {
        let state = if snapshot.running { "Running" } else { "Paused" };
        vec![
            Line::from(Span::styled(
                snapshot.format_remaining(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(state, Style::default().fg(Color::DarkGray))),
            Line::from(""),
            Line::from(format!(
                "Completed Pomodoros: {}",
                snapshot.completed_work_sessions
            )),
        ]
    };

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(body, area);
}

/// Render the session progress gauge.
fn render_progress(frame: &mut Frame<'_>, view: &View, area: Rect) {
    let progress = view.snapshot.progress();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(session_color(view.snapshot.session)))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));

    frame.render_widget(gauge, area);
}

/// Render the stats panel.
fn render_stats(frame: &mut Frame<'_>, stats: &StatsSummary, area: Rect) {
    let best = stats.best_day.map_or_else(
        || "-".to_string(),
        |date| format!("{} ({})", stats.best_day_count, date.format("%Y-%m-%d")),
    );

    let lines = vec![
        Line::from(format!("Today:   {}", stats.today_count)),
        Line::from(format!("Total:   {}", stats.total)),
        Line::from(format!(
            "Streak:  {} days (longest {})",
            stats.current_streak, stats.longest_streak
        )),
        Line::from(format!("Best:    {best}")),
        Line::from(format!(
            "Last {}: {}",
            stats.recent.len(),
            render_sparkline(&stats.recent_counts())
        )),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(panel, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, view: &View, area: Rect) {
    let hint = if view.snapshot.awaiting_next {
        PROMPT_HELP
    } else {
        TIMER_HELP
    };
    let text = view
        .status
        .as_ref()
        .map_or_else(|| hint.to_string(), |status| format!("{status} | {hint}"));

    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::DailyStats;
    use crate::timer::Snapshot;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;

    fn snapshot() -> Snapshot {
        Snapshot {
            session: SessionKind::Work,
            time_remaining: 1500.0,
            session_length: 1500.0,
            running: true,
            awaiting_next: false,
            completed_work_sessions: 2,
        }
    }

    fn screen_text(view: &View) -> String {
        let terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut renderer = TerminalRenderer::new(terminal);
        renderer.draw(view).unwrap();

        let buffer = renderer.terminal_mut().backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_countdown() {
        let view = View {
            snapshot: snapshot(),
            stats: None,
            status: None,
        };
        let text = screen_text(&view);

        assert!(text.contains("Pomodoro Timer - Work"));
        assert!(text.contains("25:00"));
        assert!(text.contains("Running"));
        assert!(text.contains("Completed Pomodoros: 2"));
        assert!(text.contains("p:pause/resume"));
        assert!(!text.contains("Stats"));
    }

    #[test]
    fn test_render_prompt() {
        let view = View {
            snapshot: Snapshot {
                session: SessionKind::LongBreak,
                awaiting_next: true,
                running: false,
                ..snapshot()
            },
            stats: None,
            status: Some(SessionKind::LongBreak.announcement().to_string()),
        };
        let text = screen_text(&view);

        assert!(text.contains("Next session: Long Break"));
        assert!(text.contains("Skip next session"));
        assert!(text.contains("Time for a long break"));
    }

    #[test]
    fn test_render_stats_panel() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let stats = DailyStats::from_json(r#"{"2024-03-01": 6, "2024-03-02": 3}"#).unwrap();
        let view = View {
            snapshot: snapshot(),
            stats: Some(StatsSummary::calculate(&stats, today, 7)),
            status: None,
        };
        let text = screen_text(&view);

        assert!(text.contains("Stats"));
        assert!(text.contains("Today:   3"));
        assert!(text.contains("Total:   9"));
        assert!(text.contains("Streak:  2 days"));
    }
}
