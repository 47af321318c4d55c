pub mod assign;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod github;
pub mod github_bot;
pub mod http;
pub mod logging;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;
