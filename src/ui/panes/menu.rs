//! Algorithm selection pane

use super::pane_block;
use crate::automaton::Algorithm;
use crate::history::Scoreboard;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the menu of algorithms and, below it, the results so far
pub fn render_menu_pane(frame: &mut Frame, area: Rect, selected: usize, scoreboard: &Scoreboard) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Algorithm::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let items: Vec<ListItem> = Algorithm::ALL
        .iter()
        .enumerate()
        .map(|(i, algorithm)| {
            let is_selected = i == selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(DEFAULT_THEME.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, name_style),
                Span::styled(format!("{:<8}", algorithm.name()), name_style),
                Span::styled(
                    algorithm.summary(),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        pane_block(" Which algorithm would you choose? ", true).padding(Padding::new(1, 0, 0, 0)),
    );
    frame.render_widget(list, rows[0]);

    let entries = scoreboard.entries();
    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::styled(
            "(no sessions finished yet)",
            Style::default().fg(DEFAULT_THEME.comment),
        )]
    } else {
        entries
            .iter()
            .map(|(algorithm, tally)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<8}", algorithm.name()),
                        Style::default().fg(DEFAULT_THEME.primary),
                    ),
                    Span::styled(
                        format!(
                            "{} correct of {} steps over {} session(s)",
                            tally.correct, tally.rounds, tally.sessions
                        ),
                        Style::default().fg(DEFAULT_THEME.fg),
                    ),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(pane_block(" Scoreboard ", false).padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(paragraph, rows[1]);
}
