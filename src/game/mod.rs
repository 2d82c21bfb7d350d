pub mod consts;
pub mod direction;
pub mod format;
pub mod models;
pub mod proximity;
pub mod session;
pub mod share;
