//! tests/mod.rs

mod tracking_tests;
