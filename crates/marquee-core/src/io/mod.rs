pub mod crop;
pub mod export;
pub mod loader;
