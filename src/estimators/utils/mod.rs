pub mod labeled_matrix;
pub mod stats;
