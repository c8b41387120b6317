//! Library components of the medkit CLI.

pub mod exit;
pub mod logging;
pub mod report;
