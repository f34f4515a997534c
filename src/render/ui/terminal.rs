//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui
//! for cross-platform terminal interface. The backdrop is read from the shared
//! [`TerminalSurface`] and painted first, with the converter card and the
//! notifications drawn over it.

use crate::app::Page;
use crate::background::{SurfaceSnapshot, TerminalSurface};
use crate::converter::{ConverterPanel, Field, TextField};
use crate::error::Result;
use crate::render::ui::state::{scroll_offset, ViewState};
use crate::render::ui::{ColorTheme, UIRenderer};
use ratatui::crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Instant;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Widest the converter card gets.
const CARD_WIDTH: u16 = 72;
/// Tallest the converter card gets.
const CARD_HEIGHT: u16 = 22;
/// Width of the notification box.
const TOAST_WIDTH: u16 = 44;

/// Terminal UI implementation with ratatui backend
///
/// This implementation focuses purely on drawing. Input is read by the input thread
/// and state is owned by the Application.
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
    surface: Option<TerminalSurface>,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
            surface: None,
        })
    }

    /// Paint the frames presented on `surface` behind the panel
    pub fn with_surface(mut self, surface: TerminalSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn theme(&self) -> &ColorTheme {
        &self.theme
    }
}

/// Draw one full screen: backdrop, card, notifications, cursor.
pub fn draw_page(
    frame: &mut Frame,
    page: &Page,
    view_state: &ViewState,
    theme: &ColorTheme,
    backdrop: Option<&SurfaceSnapshot>,
) {
    let size = frame.size();

    if let Some(snapshot) = backdrop {
        render_backdrop(frame, size, snapshot, theme);
    }

    let card = card_area(size, view_state);
    render_card(frame, card, &page.panel, view_state, theme);
    render_toasts(frame, size, &page.panel, theme);
}

/// Wireframe edges on a braille canvas spanning the whole screen
fn render_backdrop(frame: &mut Frame, area: Rect, snapshot: &SurfaceSnapshot, theme: &ColorTheme) {
    let Some(rendered) = snapshot.frame.as_ref() else {
        return;
    };
    let color = theme.wire_color(rendered.color);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for segment in &rendered.segments {
                ctx.draw(&CanvasLine {
                    x1: segment.from.0,
                    y1: segment.from.1,
                    x2: segment.to.0,
                    y2: segment.to.1,
                    color,
                });
            }
        });
    frame.render_widget(canvas, area);
}

/// Centered card, or the whole screen when the terminal is small
fn card_area(area: Rect, view_state: &ViewState) -> Rect {
    if view_state.is_cramped() {
        return area;
    }
    let width = area.width.min(CARD_WIDTH);
    let height = area.height.min(CARD_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    panel: &ConverterPanel,
    view_state: &ViewState,
    theme: &ColorTheme,
) {
    let messages = panel.messages();
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.panel_border))
        .title(Span::styled(messages.heading.as_str(), theme.heading));
    let inner = card.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(card, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let mut hints = format!(
        "Ctrl+V {} | Ctrl+L {} | Esc {}",
        messages.paste_label, messages.clear_label, messages.quit_label
    );
    if view_state.clipboard_pending {
        hints.push_str(" ...");
    }
    frame.render_widget(Paragraph::new(hints).style(theme.hint), chunks[0]);

    render_field(
        frame,
        chunks[1],
        panel.text_field(),
        None,
        Some(messages.text_placeholder.as_str()),
        panel.focus() == Field::Text,
        theme,
    );
    render_field(
        frame,
        chunks[2],
        panel.filename_field(),
        Some(messages.filename_label.as_str()),
        Some(crate::converter::DEFAULT_FILENAME),
        panel.focus() == Field::Filename,
        theme,
    );

    let download = format!("Ctrl+S {} | Tab", messages.download_label);
    frame.render_widget(
        Paragraph::new(download).style(theme.hint.add_modifier(Modifier::BOLD)),
        chunks[3],
    );
}

/// Bordered input box; places the terminal cursor when focused
fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    title: Option<&str>,
    placeholder: Option<&str>,
    focused: bool,
    theme: &ColorTheme,
) {
    let border = if focused {
        theme.focused_border
    } else {
        theme.panel_border
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(title) = title {
        block = block.title(title);
    }
    let inner = block.inner(area);

    let (line, column) = field.cursor_line_col();
    let rows = usize::from(inner.height);
    let top = scroll_offset(line, rows);

    let paragraph = if field.is_empty() {
        Paragraph::new(placeholder.unwrap_or_default()).style(theme.placeholder)
    } else {
        let lines: Vec<Line> = field.value().split('\n').map(Line::raw).collect();
        Paragraph::new(lines)
            .style(theme.text())
            .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0))
    };
    frame.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let prefix: String = field
            .value()
            .split('\n')
            .nth(line)
            .unwrap_or_default()
            .chars()
            .take(column)
            .collect();
        let offset_x = u16::try_from(Span::raw(prefix).width()).unwrap_or(u16::MAX);
        let offset_y = u16::try_from(line - top).unwrap_or(u16::MAX);
        frame.set_cursor(
            inner.x + offset_x.min(inner.width - 1),
            inner.y + offset_y.min(inner.height - 1),
        );
    }
}

/// Stacked notification boxes in the top-right corner
fn render_toasts(frame: &mut Frame, area: Rect, panel: &ConverterPanel, theme: &ColorTheme) {
    let width = area.width.min(TOAST_WIDTH);
    let mut y = area.y;

    for toast in panel.toasts().visible(Instant::now()) {
        let notification = &toast.notification;
        let style = if notification.is_destructive() {
            theme.toast_error
        } else {
            theme.toast
        };

        // Two border rows, the title, and the wrapped description
        let text_width = usize::from(width.saturating_sub(2)).max(1);
        let description_rows = notification.description.chars().count() / text_width + 1;
        let height = u16::try_from(description_rows + 3).unwrap_or(u16::MAX);
        let bottom = area.y + area.height;
        if y >= bottom {
            break;
        }
        let rect = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height: height.min(bottom - y),
        };

        let body = vec![
            Line::from(Span::styled(
                notification.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::raw(notification.description.as_str()),
        ];
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(body)
                .style(style)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).style(style)),
            rect,
        );
        y += rect.height;
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, page: &Page, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            // Extract theme before closure to avoid borrowing issues
            let theme = &self.theme;
            let backdrop = self.surface.as_ref().and_then(TerminalSurface::snapshot);

            terminal.draw(move |frame| {
                draw_page(frame, page, view_state, theme, backdrop.as_ref());
            })?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
