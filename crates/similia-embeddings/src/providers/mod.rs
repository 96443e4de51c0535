mod hashing_provider;
mod http_provider;

pub use hashing_provider::HashingProvider;
pub use http_provider::HttpProvider;
