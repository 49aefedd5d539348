use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::store::word_store::WordRecord;
use crate::ui::theme::Theme;

/// The flip card. Front shows the term (plus pronunciation and current
/// level from the live store record), back shows the translation. While
/// `concealed` the face is blanked so the jump to the next card is visible.
pub struct FlipCard<'a> {
    pub word: &'a WordRecord,
    pub flipped: bool,
    pub concealed: bool,
    pub theme: &'a Theme,
}

impl<'a> FlipCard<'a> {
    pub fn new(word: &'a WordRecord, flipped: bool, concealed: bool, theme: &'a Theme) -> Self {
        Self {
            word,
            flipped,
            concealed,
            theme,
        }
    }
}

impl Widget for FlipCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let face_color = if self.flipped {
            colors.card_back()
        } else {
            colors.card_front()
        };
        let title = if self.flipped { " translation " } else { " term " };

        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(if self.flipped {
                colors.accent()
            } else {
                colors.border()
            }))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.concealed {
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let mut face_lines: Vec<Line> = vec![Line::from("")];
        if self.flipped {
            face_lines.push(Line::from(Span::styled(
                self.word.translation.clone(),
                Style::default().fg(face_color).add_modifier(Modifier::BOLD),
            )));
        } else {
            face_lines.push(Line::from(Span::styled(
                self.word.term.clone(),
                Style::default().fg(face_color).add_modifier(Modifier::BOLD),
            )));
            if let Some(ref pron) = self.word.pronunciation {
                face_lines.push(Line::from(Span::styled(
                    format!("[{pron}]"),
                    Style::default().fg(colors.text_dim()),
                )));
            }
        }
        Paragraph::new(face_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let level_text = format!("Lv.{}", self.word.level);
        Paragraph::new(Line::from(Span::styled(
            level_text,
            Style::default().fg(colors.text_dim()),
        )))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        let hint = if self.flipped {
            "[o] knew it   [x] missed it"
        } else {
            "[Space] flip"
        };
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(colors.text_dim()),
        )))
        .alignment(Alignment::Center)
        .render(layout[2], buf);
    }
}
