//! Pipeline module

pub mod compose;
pub mod stages;

pub use compose::{compose, compose_from_selector, CodecDirection};
pub use stages::{DEFAULT_PERCEPTION_TOPIC, ROS_IMAGE_TOPIC, SHARED_MEM_IMAGE_TOPIC};
