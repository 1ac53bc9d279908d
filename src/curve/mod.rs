pub mod point;
pub mod sampler;
