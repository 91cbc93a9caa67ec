//! readalong: CLI front end for the readalong-core engine.

pub mod align;
pub mod cli;
pub mod follow;
pub mod inputs;
