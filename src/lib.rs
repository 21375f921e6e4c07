//! # Turtle BASIC
//!
//! A line-numbered BASIC whose statements drive a drawing turtle.
//!
//! Begin by opening a terminal and running the `turtle` executable.
//! If you get the following, you have achieved success.
//! ```text
//! TURTLE BASIC
//! READY.
//! > █
//! ```
//!
//! A program file can be given on the command line to load and run it.
//! The interpreter itself is in [`mach::Runtime`], which can be driven
//! without a terminal:
//! ```
//! use turtle::mach::{Event, Runtime};
//! let mut runtime = Runtime::default();
//! runtime.enter("PRINT \"HELLO\"");
//! assert_eq!(runtime.execute(100), Event::Print("HELLO".to_string()));
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
#[doc(hidden)]
pub mod term;
