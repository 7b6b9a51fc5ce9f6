pub mod ide;

pub use crate::domain::model::{Choice, MenuState};
pub use crate::domain::ports::Terminal;
pub use crate::utils::error::Result;
