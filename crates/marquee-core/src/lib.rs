pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod io;
pub mod mapper;
pub mod options;
pub mod session;
pub mod shape;
pub mod surface;
