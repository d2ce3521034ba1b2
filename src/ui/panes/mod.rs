//! TUI pane rendering modules
//!
//! Each pane module exports a `render_*` function that draws one region of the
//! frame from borrowed application state. Panes hold no state of their own
//! apart from scroll offsets passed in by the caller.
//!
//! # Pane Modules
//!
//! - [`menu`]: Algorithm selection with per-algorithm results so far
//! - [`array`]: Original and current array, plus a bar chart of the current one
//! - [`history`]: Every round of the session with the guess and the real snapshot
//! - [`input`]: The guess being typed, or the final score once the sort is done
//! - [`status`]: Status bar with keybindings and score

pub mod array;
pub mod history;
pub mod input;
pub mod menu;
pub mod status;

// Re-export render functions for convenience
pub use array::render_array_pane;
pub use history::render_history_pane;
pub use input::render_input_pane;
pub use menu::render_menu_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block shared by all panes
fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
