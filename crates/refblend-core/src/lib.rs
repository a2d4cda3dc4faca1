pub mod config;
pub mod consts;
pub mod error;
pub mod generate;
pub mod io;
pub mod job;
pub mod prompt;
pub mod request;
pub mod status;
pub mod viewer;
