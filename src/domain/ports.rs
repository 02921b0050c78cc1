use crate::domain::model::{OutputFormat, ReverseMode};

pub trait ConfigProvider: Send + Sync {
    fn output_format(&self) -> OutputFormat;
    fn reverse_mode(&self) -> ReverseMode;
    fn verbose(&self) -> bool;
}
