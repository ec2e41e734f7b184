//! Native CLI support for the `csz-decls` binary.
//!
//! The binary reads serialized syntax trees (JSON), builds their declaration
//! trees in parallel and prints an outline or a JSON dump of the result.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod tracing_config;

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;
#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod reporter_tests;
