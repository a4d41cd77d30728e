//! Command handlers. One per thing the binary can do.

pub mod setup;
