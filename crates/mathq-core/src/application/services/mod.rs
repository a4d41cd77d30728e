//! Application services (use cases).

mod setup_service;

pub use setup_service::SetupService;
