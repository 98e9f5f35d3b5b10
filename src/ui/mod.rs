//! Terminal UI for the provisio binary
//!
//! Everything here draws on stderr.

pub mod context;
pub mod error;
pub mod live_region;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
