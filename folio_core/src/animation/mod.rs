mod lifecycle;
mod spring;

pub use lifecycle::{FrameLoop, Teardown};
pub use spring::Spring;
