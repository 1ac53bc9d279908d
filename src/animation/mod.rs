pub mod animator;
pub mod clock;
pub mod frame;
pub mod trail;
