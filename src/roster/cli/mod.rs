//! Terminal front end: the menu loop, prompt/retry reading, and printing.
//! This is the only layer that touches stdin or stdout.

pub mod controller;
pub mod print;
pub mod reader;
