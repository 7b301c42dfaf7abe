//! Tree Menu Widget
//!
//! The category tree of the browse screen. Moving onto a node and opening it
//! selects that node's category path.
//!
//! # Module Structure
//!
//! - `node` - TreeNode data structure
//! - `menu` - Visible rows, cursor and action handling
//! - `render` - Terminal rendering functions
//! - `input` - Keyboard input handling and interactive loop
//! - `builder` - Tree construction from the navigation tree

mod builder;
mod input;
mod menu;
mod node;
mod render;

pub use input::run_interactive;
