//! Terminal UI
//!
//! Capability detection, design tokens and the string renderers used by the
//! commands. Renderers return strings; printing is left to the caller.

pub mod blocks;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
