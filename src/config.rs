//! JSON configuration of the command-line tools.

pub mod lines;
pub mod rectify;
