//! Taskman - a small interactive command-line task tracker
//!
//! This library provides the pieces behind the `taskman` binary:
//! - Opening the SQLite store and resetting its schema
//! - The task model (description, optional deadline, pending/completed)
//! - Repository functions returning typed outcomes
//! - The numbered menu loop that renders those outcomes
//!
//! # Example
//!
//! ```no_run
//! use taskman::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Unexpected error: {}", e);
//!         std::process::exit(2);
//!     }
//! }
//! ```

pub mod db;
pub mod error;
pub mod models;
pub mod repo;
pub mod cli;
