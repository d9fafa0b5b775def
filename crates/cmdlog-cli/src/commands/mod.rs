//! CLI command implementations.

pub mod capture;
pub mod emit;
pub mod levels;
pub mod run;
pub mod trace_demo;
