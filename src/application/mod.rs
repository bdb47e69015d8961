pub mod auth;
pub mod flow;
pub mod projection;
