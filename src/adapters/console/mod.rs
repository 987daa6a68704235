//! Console presentation: a text renderer and a line parser.

mod input;
mod renderer;

pub use input::{parse_line, ConsoleCommand, InputError, HELP};
pub use renderer::{format_panel, ConsoleRenderer};
