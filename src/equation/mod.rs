pub mod coeffs;
pub mod registry;
