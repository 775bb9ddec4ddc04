pub mod detect;
pub mod engine;
pub mod mask;
pub mod pipeline;
pub mod processor;
pub mod rules;

pub use crate::domain::model::{CategoryFlags, Record, RedactedRow, Row, TransformResult};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
