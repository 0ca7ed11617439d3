pub mod config;
pub mod logging;
pub mod namer;
pub mod request;
