/*!
## Rust Machine Module

This Rust module is the interpreter for Turtle BASIC: variable memory,
the turtle, the program store, the statement executor and the run driver.

*/

mod config;
pub mod disk;
mod editor;
pub mod exec;
mod flow;
mod listing;
mod machine;
mod runtime;
mod stack;
mod turtle;
mod val;
mod var;

pub use config::Config;
pub use editor::Editor;
pub use flow::Flow;
pub use flow::ForFrame;
pub use listing::Listing;
pub use machine::Machine;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use turtle::{Canvas, Color, DisplayList, Point, Stroke, Turtle};
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
