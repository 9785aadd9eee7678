//! IO module tests.

mod reader_tests;
mod resolve_tests;
