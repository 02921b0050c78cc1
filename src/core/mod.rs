pub mod engine;
pub mod ratio;
pub mod reverse;

pub use crate::domain::model::{
    CharacterClass, ClassCounts, DemoRatio, Outcome, OutputFormat, Request, ReverseMode,
};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
