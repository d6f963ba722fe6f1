//! Pagebench - file-read and JSON-parse latency under cold and warm page cache
//!
//! This library provides the building blocks for a micro-benchmark harness:
//! an external page-cache dropper, a fixture preparer that materializes
//! numbered copies of a JSON sample file, a timed concurrent batch reader,
//! the four benchmark scenarios, and a raw-sample result writer.

pub mod cache;
pub mod cli;
pub mod fixtures;
pub mod reader;
pub mod results;
pub mod runner;
