pub mod estimator;
pub mod labels;
pub mod summary;
pub mod chart;
pub mod pdf_export;
