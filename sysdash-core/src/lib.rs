pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod signal;
pub mod source;
pub mod state;
