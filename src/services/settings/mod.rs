// Settings service module
// Persisted application title

mod service;

pub use service::TitleService;
