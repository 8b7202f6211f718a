pub mod assembler;
pub mod chart;
pub mod console;
pub mod error;
pub mod generator;
pub mod html;
pub mod json;
pub mod page;
pub mod renderer;
pub mod report_model;
pub mod resources;
