//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ModelClient` - Port for generative model completions

mod model_client;

pub use model_client::{ModelClient, ModelError};
