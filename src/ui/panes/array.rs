//! Array pane: the session's starting point, the live array and a bar chart

use super::pane_block;
use crate::process::SortProcess;
use crate::session::format_array;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Padding, Paragraph},
    Frame,
};

/// Render the array pane
pub fn render_array_pane(frame: &mut Frame, area: Rect, process: &SortProcess<i32>) {
    let block = pane_block(" Array ", true).padding(Padding::new(1, 1, 0, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let lines = vec![
        Line::from(vec![
            Span::styled("Algorithm ", label_style),
            Span::styled(
                process.algorithm().name(),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Original  ", label_style),
            Span::styled(
                format_array(process.original()),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
        Line::from(vec![
            Span::styled("Current   ", label_style),
            Span::styled(
                format_array(process.current()),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), rows[0]);

    render_bars(frame, rows[1], process.current());
}

/// Bar chart of the array, shifted so the smallest element still has a bar
fn render_bars(frame: &mut Frame, area: Rect, values: &[i32]) {
    if values.is_empty() || area.height < 3 {
        return;
    }

    let min = values.iter().copied().min().unwrap_or(0);
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let height = (i64::from(*v) - i64::from(min) + 1) as u64;
            Bar::default()
                .value(height)
                .text_value(v.to_string())
                .label(Line::from(i.to_string()))
        })
        .collect();

    let count = values.len() as u16;
    let gap = 1;
    let bar_width = (area.width.saturating_sub(gap * count) / count).clamp(1, 7);

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap)
        .bar_style(Style::default().fg(DEFAULT_THEME.bar))
        .value_style(
            Style::default()
                .fg(DEFAULT_THEME.bar)
                .add_modifier(Modifier::REVERSED),
        )
        .label_style(Style::default().fg(DEFAULT_THEME.comment));

    frame.render_widget(chart, area);
}
