pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::clock::{FixedClock, SystemClock};
pub use config::FormatterConfig;
pub use core::formatter::Formatter;
pub use domain::model::{Award, AwardType, Locale, ProjectStatus, ProjectType};
pub use domain::ports::Clock;
pub use utils::error::{FormatError, Result};
