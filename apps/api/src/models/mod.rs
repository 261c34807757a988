pub mod cv;
pub mod plan;
