//! Error module tests.

mod aggregate_tests;
