//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`specimens`]: List of captured values with their kinds and sizes
//! - [`bytes`]: Byte-by-byte layout of the selected value with offsets
//! - [`status`]: Status bar with keybindings and the inspected prefix
//!
//! Each pane module exports a primary `render_*` function and, where it needs
//! more than a couple of inputs, a `*RenderData` struct bundling them.

pub mod bytes;
pub mod specimens;
pub mod status;

pub use bytes::{render_bytes_pane, BytesRenderData};
pub use specimens::render_specimen_pane;
pub use status::{render_status_bar, StatusRenderData};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all bordered panes
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
