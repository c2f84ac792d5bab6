//! Pieces shared by every `bookinn` crate: the runtime [`config::Config`]
//! and the logging macros ([`success!`], [`info!`], [`warn!`]).

pub mod config;
pub mod log;
