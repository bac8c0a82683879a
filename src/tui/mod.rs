//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for choosing the model family, data
//! source and display options, then renders the scatter + trendline chart
//! next to the statistics report.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Terminal,
};

use crate::domain::{FitConfig, ModelFamily};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::TrendChart;

/// Start the TUI.
pub fn run(config: FitConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Which settings line the cursor is on.
mod field {
    pub const FAMILY: usize = 0;
    pub const USE_DEFAULT: usize = 1;
    pub const WHOLE_NUMBERS: usize = 2;
    pub const ROUNDING: usize = 3;
    pub const X_VALUES: usize = 4;
    pub const Y_VALUES: usize = 5;
    pub const COUNT: usize = 6;
}

struct App {
    config: FitConfig,
    x_input: String,
    y_input: String,
    selected_field: usize,
    /// Index of the text field being edited, when in edit mode.
    editing: Option<usize>,
    status: String,
    run: Option<crate::app::pipeline::RunOutput>,
}

impl App {
    fn new(config: FitConfig) -> Self {
        let mut app = Self {
            x_input: config.x_text.clone().unwrap_or_default(),
            y_input: config.y_text.clone().unwrap_or_default(),
            config,
            selected_field: 0,
            editing: None,
            status: String::new(),
            run: None,
        };
        app.refit();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing.is_some() {
            self.handle_text_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < field::COUNT - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Enter => {
                if matches!(self.selected_field, field::X_VALUES | field::Y_VALUES) {
                    self.editing = Some(self.selected_field);
                    self.status =
                        "Editing values (whitespace-separated). Enter to apply, Esc to cancel."
                            .to_string();
                } else {
                    self.adjust_field(1);
                }
            }
            KeyCode::Char('r') => {
                self.refit();
            }
            _ => {}
        }

        false
    }

    fn handle_text_edit(&mut self, code: KeyCode) {
        let Some(target) = self.editing else { return };
        let buffer = if target == field::X_VALUES {
            &mut self.x_input
        } else {
            &mut self.y_input
        };

        match code {
            KeyCode::Esc => {
                self.editing = None;
                self.status = "Edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.editing = None;
                // Typed-in values take over from the default dataset.
                self.config.use_default = false;
                self.refit();
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E' | ' ') {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            field::FAMILY => {
                self.config.family = if delta >= 0 {
                    next_family(self.config.family)
                } else {
                    prev_family(self.config.family)
                };
                self.refit();
            }
            field::USE_DEFAULT => {
                self.config.use_default = !self.config.use_default;
                self.refit();
            }
            field::WHOLE_NUMBERS => {
                self.config.whole_number_axes = !self.config.whole_number_axes;
                self.refit();
            }
            field::ROUNDING => {
                self.config.use_rounding = !self.config.use_rounding;
                self.refit();
            }
            _ => {}
        }
    }

    /// Re-run the fit pipeline with the current settings.
    ///
    /// Input errors land in the status line; the previous run stays on screen.
    fn refit(&mut self) {
        let mut config = self.config.clone();
        if self.config.use_default || self.x_input.trim().is_empty() {
            config.x_text = None;
            config.y_text = None;
            config.use_default = true;
        } else {
            config.x_text = Some(self.x_input.clone());
            config.y_text = Some(self.y_input.clone());
        }

        match crate::app::pipeline::run_fit(&config) {
            Ok(run) => {
                self.status = match &run.degenerate {
                    Some(reason) => format!("Degenerate fit: {reason} (scatter only)."),
                    None => format!(
                        "Fitted {} model to {} samples.",
                        run.family.display_name(),
                        run.samples.len()
                    ),
                };
                self.run = Some(run);
            }
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(10),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_settings(frame, chunks[2]);
        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("trend", Style::default().fg(Color::Cyan)),
            Span::raw(" — scatter + trendline fitting"),
        ]));

        let n = self.run.as_ref().map(|r| r.stats.n).unwrap_or(0);
        let model_desc = match self.run.as_ref().and_then(|r| r.model.as_ref()) {
            Some(model) => equation_line(model),
            None => "no trendline".to_string(),
        };

        lines.push(Line::from(Span::styled(
            format!(
                "family: {} | n={n} | {model_desc}",
                self.config.family.display_name(),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(46)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_report(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = self.config.family.trendline_label();
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let points: Vec<(f64, f64)> = run.samples.iter().map(|s| (s.x, s.y)).collect();
        let widget = TrendChart {
            curve: &run.curve,
            points: &points,
            x_bounds: [run.axis.min_x, run.axis.max_x],
            y_bounds: [run.axis.min_y, run.axis.max_y],
            x_label: &self.config.x_label,
            y_label: &self.config.y_label,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_report(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let text = self
            .run
            .as_ref()
            .map(|r| r.report.as_str())
            .unwrap_or("No report yet.");

        let p = Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Report").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let check = |v: bool| if v { "[x]" } else { "[ ]" };

        let items = vec![
            ListItem::new(format!("Family: {}", self.config.family.display_name())),
            ListItem::new(format!("{} Use default dataset", check(self.config.use_default))),
            ListItem::new(format!("{} Whole-number axes", check(self.config.whole_number_axes))),
            ListItem::new(format!("{} Round to 2 decimals", check(self.config.use_rounding))),
            ListItem::new(format!("X values: {}", self.x_input)),
            ListItem::new(format!("Y values: {}", self.y_input)),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);

        if self.editing.is_some() {
            let hint = Paragraph::new("Editing values…")
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            let rect = Rect {
                x: area.x + 2,
                y: area.y + area.height.saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(hint, rect);
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Enter edit/toggle  r refit  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn next_family(cur: ModelFamily) -> ModelFamily {
    match cur {
        ModelFamily::Linear => ModelFamily::Quadratic,
        ModelFamily::Quadratic => ModelFamily::Exponential,
        ModelFamily::Exponential => ModelFamily::Power,
        ModelFamily::Power => ModelFamily::Linear,
    }
}

fn prev_family(cur: ModelFamily) -> ModelFamily {
    match cur {
        ModelFamily::Linear => ModelFamily::Power,
        ModelFamily::Quadratic => ModelFamily::Linear,
        ModelFamily::Exponential => ModelFamily::Quadratic,
        ModelFamily::Power => ModelFamily::Exponential,
    }
}

/// One-line equation summary for the header.
fn equation_line(model: &crate::domain::FittedModel) -> String {
    use crate::domain::FittedModel;
    use crate::report::fmt_smart;

    match *model {
        FittedModel::Linear { slope, intercept } => {
            format!("y = {}x + {}", fmt_smart(slope, true), fmt_smart(intercept, true))
        }
        FittedModel::Quadratic { a, b, c } => format!(
            "y = {}x² + {}x + {}",
            fmt_smart(a, true),
            fmt_smart(b, true),
            fmt_smart(c, true)
        ),
        FittedModel::Exponential { a, b, x_mean } => format!(
            "y = {}*e^({}*(x-{}))",
            fmt_smart(a, true),
            fmt_smart(b, true),
            fmt_smart(x_mean, true)
        ),
        FittedModel::Power { a, b } => {
            format!("y = {}*x^{}", fmt_smart(a, true), fmt_smart(b, true))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_cycle_is_a_bijection() {
        for family in [
            ModelFamily::Linear,
            ModelFamily::Quadratic,
            ModelFamily::Exponential,
            ModelFamily::Power,
        ] {
            assert_eq!(prev_family(next_family(family)), family);
        }
    }

    #[test]
    fn equation_line_is_compact() {
        let line = equation_line(&crate::domain::FittedModel::Linear {
            slope: 2.0,
            intercept: 1.0,
        });
        assert_eq!(line, "y = 2x + 1");
    }
}
