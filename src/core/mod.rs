pub mod classify;
pub mod dates;
pub mod formatter;
pub mod lookup;
pub mod text;

pub use crate::domain::model::{Award, AwardType, Locale, ProjectStatus, ProjectType};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
