pub mod core;
pub mod net;
