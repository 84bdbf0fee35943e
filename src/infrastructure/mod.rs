// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_upload;
pub mod default_dataset;
pub mod http_response;
pub mod memory_store;
pub mod plotly_mapper;
