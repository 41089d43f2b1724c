pub mod config;
pub mod crop;
pub mod info;
