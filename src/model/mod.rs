pub mod ordering;
pub mod result_model;
