//! Application layer - orchestration of domain logic over the ports.

mod pipeline;

pub use pipeline::{AnalysisError, AnalysisPipeline};
