//! Guess input line

use super::pane_block;
use crate::session::Score;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PROMPT: &str = "> ";

/// Render the input line, or the final score once `finished` is set
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, finished: Option<Score>) {
    if let Some(score) = finished {
        let line = Line::from(vec![
            Span::styled(
                format!(" Sorted! {}/{} steps guessed ", score.correct, score.rounds),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "· r to play again · q to quit",
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(line).block(pane_block(" Done ", false)),
            area,
        );
        return;
    }

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(pane_block(" Next step (JSON array) ", true)),
        area,
    );

    // Cursor sits after the typed text, inside the border
    let x = area.x + 1 + (PROMPT.len() + input.chars().count()) as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    frame.set_cursor_position((x.min(max_x), area.y + 1));
}
