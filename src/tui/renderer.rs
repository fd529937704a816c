use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::app::{App, Phase};
use crate::buffer::{OutputKind, OutputLine};
use crate::decor::Theme;
use crate::motion::{bounce_offset, frame_index};
use crate::process::Lifecycle;
use crate::tui::forms::IdeaForm;
use crate::tui::status_bar::{clamp_width, status_line};

/// Rows of the running view not available to the log
pub const RUNNING_CHROME_HEIGHT: u16 = 2 + HEADER_HEIGHT + 2;

const HEADER_HEIGHT: u16 = 8;

const SHORT_HELP: &str = "? wat?  q abandon ship  t next theme  a next anim  s next snark";
const RUNNING_HELP: &str = "j/k scroll  ^d/^u half page  g/G top/bottom  f follow  r run again";

/// TUI rendering handler
pub struct Renderer;

impl Renderer {
    /// Render application state
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = app.theme();
        let area = frame.area();
        frame.render_widget(Block::new().style(Style::new().bg(theme.background)), area);

        match app.phase() {
            Phase::Splash => Self::render_splash(frame, app, area),
            Phase::Setup => Self::render_setup(frame, app, area),
            Phase::Running if app.idea_form().is_some() => Self::render_idea(frame, app, area),
            Phase::Running | Phase::Done => Self::render_running(frame, app, area),
        }
    }

    fn boxed(theme: &Theme) -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme.border))
            .style(Style::new().bg(theme.background).fg(theme.foreground))
    }

    fn title(theme: &Theme, text: &'static str) -> Line<'static> {
        Line::styled(
            format!(" {} ", text),
            Style::new()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
    }

    fn dog_line(app: &App) -> Line<'static> {
        let mascot = app.mascot();
        let frame = app.frame();
        let pad = if app.phase() == Phase::Running {
            " ".repeat(bounce_offset(frame) as usize)
        } else {
            String::new()
        };
        Line::styled(
            format!("{}{} {}", pad, mascot.dog(frame), mascot.sparkle(frame)),
            Style::new().fg(app.theme().accent),
        )
    }

    fn help_line(app: &App) -> Line<'static> {
        let text = if app.show_help() {
            format!("{}  {}", SHORT_HELP, RUNNING_HELP)
        } else {
            SHORT_HELP.to_string()
        };
        Line::styled(text, Style::new().fg(app.theme().muted))
    }

    fn render_splash(frame: &mut Frame, app: &App, area: Rect) {
        let theme = app.theme();
        let text = Text::from(vec![
            Self::title(theme, "♥ VIBEPUP TUI ♥"),
            Line::default(),
            Self::dog_line(app),
            Line::default(),
            Line::styled(
                "Initializing chaos engine...",
                Style::new().fg(theme.accent_alt),
            ),
            Line::styled(app.quip().to_string(), Style::new().fg(theme.muted)),
        ]);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Self::boxed(theme));
        frame.render_widget(paragraph, area);
    }

    fn render_setup(frame: &mut Frame, app: &App, area: Rect) {
        let theme = app.theme();
        let form = app.setup_form();
        let mut lines = vec![
            Self::title(theme, "♥ VIBE CHECK ♥"),
            Line::styled("Ready to break some code?", Style::new().fg(theme.foreground)),
            Line::default(),
            Line::styled(
                "♥ Pick your poison ♥",
                Style::new().fg(theme.highlight).add_modifier(Modifier::BOLD),
            ),
        ];
        for (i, choice) in form.options().iter().enumerate() {
            let line = if i == form.selected_index() {
                Line::styled(
                    format!("> {}", choice.label()),
                    Style::new().fg(theme.accent).add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(format!("  {}", choice.label()), Style::new().fg(theme.foreground))
            };
            lines.push(line);
        }
        lines.push(Line::default());
        lines.push(Self::help_line(app));

        frame.render_widget(Paragraph::new(lines).block(Self::boxed(theme)), area);
    }

    fn render_idea(frame: &mut Frame, app: &App, area: Rect) {
        let theme = app.theme();
        let Some(form) = app.idea_form() else {
            return;
        };
        let input = if form.value().is_empty() {
            Span::styled(IdeaForm::PLACEHOLDER, Style::new().fg(theme.muted))
        } else {
            Span::styled(form.value().to_string(), Style::new().fg(theme.foreground))
        };
        let lines = vec![
            Self::title(theme, "♥ GENESIS PROTOCOL ♥"),
            Line::styled(
                "What are we manifesting today?",
                Style::new().fg(theme.accent_alt),
            ),
            Line::default(),
            Line::styled(IdeaForm::TITLE, Style::new().fg(theme.highlight)),
            Line::from(vec![
                Span::styled(IdeaForm::PROMPT, Style::new().fg(theme.accent)),
                input,
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).block(Self::boxed(theme)), area);

        if let Some(position) = Self::idea_cursor(area, form.cursor()) {
            frame.set_cursor_position(position);
        }
    }

    /// Cursor cell inside the idea box, or `None` once it would leave the box
    fn idea_cursor(area: Rect, cursor: usize) -> Option<(u16, u16)> {
        let column = IdeaForm::PROMPT.chars().count().saturating_add(cursor);
        let x = u16::try_from(column)
            .ok()
            .map(|c| area.x.saturating_add(1).saturating_add(c))?;
        // Border + four lines above the prompt
        let y = area.y.saturating_add(5);
        let inside = x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1);
        inside.then_some((x, y))
    }

    fn render_running(frame: &mut Frame, app: &App, area: Rect) {
        let theme = app.theme();
        let block = Self::boxed(theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [header, log, status, help] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(Self::header(app)), header);
        frame.render_widget(Self::log_paragraph(app), log);

        let state = match app.supervisor().lifecycle() {
            Lifecycle::NotStarted => "idle",
            Lifecycle::Running => "running",
            Lifecycle::Completed(info) if info.success() => "done",
            Lifecycle::Completed(_) | Lifecycle::Failed(_) => "bailed",
            Lifecycle::Killed => "killed",
        };
        let right = format!("{}  snark:{}", state, app.snark().name());
        frame.render_widget(
            Paragraph::new(status_line(theme, "q: quit", &right, status.width as usize)),
            status,
        );
        frame.render_widget(Paragraph::new(Self::help_line(app)), help);
    }

    fn header(app: &App) -> Text<'static> {
        let theme = app.theme();
        let mascot = app.mascot();
        let frame = app.frame();

        // Every so often the dog admits it is trying
        let status = if frame_index(frame, 120, 10) == 9 {
            "♥ DOING MY BEST ♥"
        } else {
            "♥ VIBING HARD ♥"
        };
        let loader = app
            .preset()
            .frame_at(frame, app.settings().performance.period());
        let loader = if app.settings().quiet {
            clamp_width(loader, 6)
        } else {
            loader
        };
        let mode = app.selection().map(|c| c.name()).unwrap_or("idle");

        Text::from(vec![
            Line::styled(
                format!("{} {}  {}", status, loader, mascot.thinking(frame)),
                Style::new().fg(theme.highlight).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("MODE: {}", mode.to_uppercase()),
                Style::new().fg(theme.accent_alt),
            ),
            Line::default(),
            Line::styled(
                format!("{} {}", mascot.sparkle(frame), app.quip()),
                Style::new().fg(theme.foreground),
            ),
            Line::default(),
            Self::dog_line(app),
            Line::styled(
                app.tip(),
                Style::new()
                    .fg(theme.accent_alt)
                    .add_modifier(Modifier::ITALIC),
            ),
            Line::styled(
                "─ Matrix Stream ──────────────────────────",
                Style::new().fg(theme.muted),
            ),
        ])
    }

    fn log_paragraph(app: &App) -> Paragraph<'static> {
        let theme = app.theme();
        let lines: Vec<Line> = app
            .log()
            .visible()
            .iter()
            .map(|line| Self::log_line(theme, line))
            .collect();
        Paragraph::new(lines).scroll((0, app.log().horizontal_scroll() as u16))
    }

    fn log_line(theme: &Theme, line: &OutputLine) -> Line<'static> {
        match line.kind {
            OutputKind::Stdout => Line::from(line.spans().to_vec()),
            OutputKind::Stderr => {
                let mut spans = vec![Span::styled("ERR: ", Style::new().fg(Color::Red))];
                spans.extend(line.spans().iter().cloned());
                Line::from(spans)
            }
            OutputKind::Notice => Line::styled(line.plain(), Style::new().fg(theme.highlight)),
        }
    }
}
