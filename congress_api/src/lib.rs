mod client;
mod decode;
mod endpoint;
mod errors;
mod serde_util;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
