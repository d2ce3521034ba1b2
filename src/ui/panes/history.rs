//! Round history pane

use super::pane_block;
use crate::history::RoundHistory;
use crate::session::format_array;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the list of rounds played so far.
///
/// Each round takes two rows: the guess, then the real snapshot when the guess
/// was wrong. `scroll_offset` is clamped here; `usize::MAX` pins the view to
/// the newest round.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    history: &RoundHistory,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Rounds ", false);

    if history.is_empty() {
        let paragraph = Paragraph::new("(no guesses yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let mut all_items: Vec<ListItem> = Vec::new();
    for round in history.iter() {
        let (mark, mark_style) = if round.correct {
            ("✓", Style::default().fg(DEFAULT_THEME.success))
        } else {
            ("✗", Style::default().fg(DEFAULT_THEME.error))
        };

        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("{:>2}. ", round.number), Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(format!("{} ", mark), mark_style),
            Span::styled(format_array(&round.guess), Style::default().fg(DEFAULT_THEME.fg)),
        ])));

        if !round.correct {
            all_items.push(ListItem::new(Line::from(vec![
                Span::raw("      "),
                Span::styled(
                    format_array(&round.actual),
                    Style::default().fg(DEFAULT_THEME.success),
                ),
            ])));
        }
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
