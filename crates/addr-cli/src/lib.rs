//! Library side of the `addr` command-line tool.

pub mod input;
pub mod logging;
pub mod report;
