//! Sample shop store and the command implementations behind the `modstate` binary.

pub mod commands;
pub mod logging;
pub mod shop;
