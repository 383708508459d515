// src/core/mod.rs

pub mod format;
pub mod net;
pub mod number;
pub mod roles;
pub mod sanitize;

pub use net::Fetcher;
pub use number::to_number;
pub use sanitize::normalize_text;
