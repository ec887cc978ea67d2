mod clean;
mod save;
mod service;

pub use service::RecordCleaner;
