use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

pub struct ChapterRow {
    pub name: String,
    pub word_count: usize,
    pub due_count: usize,
}

pub struct ChapterList<'a> {
    pub rows: &'a [ChapterRow],
    pub selected: usize,
    pub due_total: usize,
    pub confirm_delete: bool,
    pub theme: &'a Theme,
}

impl<'a> ChapterList<'a> {
    pub fn new(
        rows: &'a [ChapterRow],
        selected: usize,
        due_total: usize,
        confirm_delete: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            rows,
            selected,
            due_total,
            confirm_delete,
            theme,
        }
    }
}

impl Widget for &ChapterList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(inner);

        let title_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "vocadr",
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Vocabulary Flashcards",
                Style::default().fg(colors.fg()),
            )),
        ];
        Paragraph::new(title_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let due_line = if self.due_total > 0 {
            Line::from(Span::styled(
                format!("{} words due for review — press [r]", self.due_total),
                Style::default()
                    .fg(colors.warning())
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "All caught up, nothing due today",
                Style::default().fg(colors.success()),
            ))
        };
        Paragraph::new(due_line)
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        if self.rows.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No chapters yet.",
                    Style::default().fg(colors.text_dim()),
                )),
                Line::from(Span::styled(
                    "Import one with: vocadr import words.txt",
                    Style::default().fg(colors.text_dim()),
                )),
            ])
            .alignment(Alignment::Center);
            empty.render(layout[2], buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            let is_selected = i == self.selected;
            let indicator = if is_selected { ">" } else { " " };
            let name_text = format!(" {indicator} {}", row.name);
            let count_text = if row.due_count > 0 {
                format!("  ({} words, {} due)", row.word_count, row.due_count)
            } else {
                format!("  ({} words)", row.word_count)
            };

            let name_style = Style::default()
                .fg(if is_selected { colors.accent() } else { colors.fg() })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });
            let count_style = Style::default().fg(if row.due_count > 0 {
                colors.warning()
            } else {
                colors.text_dim()
            });

            lines.push(Line::from(vec![
                Span::styled(name_text, name_style),
                Span::styled(count_text, count_style),
            ]));
        }

        if self.confirm_delete {
            if let Some(row) = self.rows.get(self.selected) {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("  Delete \"{}\"? [y/n]", row.name),
                    Style::default()
                        .fg(colors.error())
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }

        Paragraph::new(lines).render(layout[2], buf);
    }
}
