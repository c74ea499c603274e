// Core data model for taskman

pub mod task;

pub use task::*;
