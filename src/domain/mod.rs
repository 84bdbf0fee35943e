// Domain layer - Sales data, filters and chart descriptions
pub mod chart;
pub mod dataset;
pub mod filters;
pub mod sales;
