//! Integration tests for rt-rs crates.
//!
//! End-to-end checks across the tuple algebra, the canvas and file output.
