//! Backend worker: runs roster commands off the UI thread.

pub mod commands;
pub mod runtime;
