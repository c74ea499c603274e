pub mod commands;
pub mod error;
pub mod menu;
pub mod output;

pub use commands::*;
pub use error::*;
pub use menu::*;
pub use output::*;
