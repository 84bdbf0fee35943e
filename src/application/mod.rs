// Application layer - Use cases over the active dataset
pub mod chart_renderer;
pub mod chart_service;
pub mod dataset_repository;
pub mod upload_service;
