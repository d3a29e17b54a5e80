//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable UI state
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Header, filter bar, list columns, footer, empty state
//! - [`helpers`]: Cursor positioning, highlighting and width helpers
//! - [`theme`]: Colour schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, ListPane, UIViewModel,
};
