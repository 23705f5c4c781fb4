pub mod config;
pub mod error;
pub mod generator;
pub mod http;
pub mod mock;

pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::TextGenerator;
pub use http::HttpTextGenerator;
pub use mock::{FailingTextGenerator, MockTextGenerator};
