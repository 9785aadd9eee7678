//! Internal test suite.

mod config;
mod error;
mod io;
