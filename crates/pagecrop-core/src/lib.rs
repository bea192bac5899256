pub mod config;
pub mod consts;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod io;
pub mod page;
pub mod session;
