use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct SessionSummary<'a> {
    pub label: String,
    pub total: usize,
    pub wrong_count: usize,
    pub theme: &'a Theme,
}

impl<'a> SessionSummary<'a> {
    pub fn new(label: String, total: usize, wrong_count: usize, theme: &'a Theme) -> Self {
        Self {
            label,
            total,
            wrong_count,
            theme,
        }
    }
}

impl Widget for SessionSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Session Complete ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            self.label.clone(),
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(layout[0], buf);

        let cards_text = format!("Cards:  {}", self.total);
        Paragraph::new(Line::from(Span::styled(
            cards_text,
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        let wrong_line = if self.wrong_count > 0 {
            Line::from(Span::styled(
                format!("Missed: {}", self.wrong_count),
                Style::default()
                    .fg(colors.error())
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "Perfect run!",
                Style::default()
                    .fg(colors.success())
                    .add_modifier(Modifier::BOLD),
            ))
        };
        Paragraph::new(wrong_line)
            .alignment(Alignment::Center)
            .render(layout[2], buf);

        let mut hints = vec![Span::styled(
            "[q] Back to chapters  ",
            Style::default().fg(colors.accent()),
        )];
        if self.wrong_count > 0 {
            hints.push(Span::styled(
                "[r] Retry missed words",
                Style::default().fg(colors.accent()),
            ));
        }
        Paragraph::new(Line::from(hints))
            .alignment(Alignment::Center)
            .render(layout[4], buf);
    }
}
