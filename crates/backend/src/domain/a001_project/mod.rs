pub mod excel_export;
pub mod excel_import;
pub mod filter;
pub mod seed;
pub mod service;
pub mod store;

pub use store::ProjectStore;
