pub mod comparison;
pub mod fit;
pub mod models;
pub mod pipeline;
