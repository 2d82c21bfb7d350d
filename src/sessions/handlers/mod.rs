pub mod guesses;
pub mod http;
pub mod responses;
pub mod session;
