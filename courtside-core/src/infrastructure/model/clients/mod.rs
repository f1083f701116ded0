pub mod endpoint;
pub mod openai;

pub use openai::OpenAIClient;
