//! # Turtle BASIC
//!
//! Line-numbered BASIC that drives a turtle.
//!

fn main() {
    env_logger::init();
    turtle::term::main();
}
