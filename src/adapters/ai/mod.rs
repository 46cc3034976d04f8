//! Model Client Adapters.
//!
//! Implementations of the ModelClient port.
//!
//! ## Available Adapters
//!
//! - `OpenAICompatibleClient` - Any OpenAI-style chat completions API
//! - `MockModelClient` - Configurable mock for testing

mod mock_client;
mod openai_client;

pub use mock_client::{MockModelClient, MockReply};
pub use openai_client::{OpenAICompatibleClient, OpenAICompatibleConfig};
