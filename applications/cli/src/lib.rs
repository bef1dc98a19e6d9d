//! Spindle command line player
//!
//! Batch mode runs the commands given as arguments; interactive mode reads
//! them from a `spindle> ` prompt. Both parse with [`CommandParser`] and run
//! through a [`Dispatcher`] bound to an open
//! [`DeviceSession`](spindle_control::DeviceSession).

pub mod batch;
pub mod commands;
pub mod dispatch;
pub mod interactive;
pub mod output;

pub use commands::{CliError, Command, CommandParser};
pub use dispatch::{Dispatcher, Flow, VERSION};
pub use output::OutputFormat;
