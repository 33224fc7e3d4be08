mod client;
mod provider;
pub mod types;

pub use provider::GitHubProvider;
