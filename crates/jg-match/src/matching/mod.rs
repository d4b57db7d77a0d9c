pub mod experience;
pub mod factors;
pub mod filters;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod weights;
