///
/// core/mod.rs  Oct 16th, 2026
///
/// Declares Public Core Modules of the statistics client
///

pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod logging;
pub mod normalize;
pub mod pagination;
pub mod resource;
