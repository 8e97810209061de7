pub mod client;
pub mod config;
pub mod error;
pub mod feedback;
pub mod models;
pub mod normalizer;
pub mod session;
pub mod storage;

pub use client::RideShareClient;
pub use config::{ClientConfig, Environment};
pub use error::{ClientError, ClientResult};
pub use normalizer::Payload;
pub use session::Session;
