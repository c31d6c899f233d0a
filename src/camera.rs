//! Camera backend selection
//!
//! The pipeline supports three image sources, selected by the `CAM_TYPE`
//! environment variable: `fb` replays a feedback picture, `usb` drives a USB
//! camera, and everything else (including an unset variable) selects the
//! onboard MIPI camera. The selector value is passed in explicitly so
//! selection stays a pure function of its input.

use crate::actions::DeclareArgumentAction;

/// Environment variable holding the camera selector.
pub const CAM_TYPE_ENV: &str = "CAM_TYPE";

/// The camera backend feeding the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraKind {
    /// Replays a local picture through the image publisher.
    Feedback,
    /// USB camera driver, publishing a ROS image topic.
    Usb,
    /// Onboard MIPI camera driver, publishing into shared memory.
    Mipi,
}

impl CameraKind {
    /// Map a selector value to a camera backend.
    ///
    /// Unrecognized values fall into the MIPI default without failing; a typo
    /// therefore composes the default pipeline rather than erroring. That
    /// matches the established `CAM_TYPE` contract, so the mismatch is only
    /// logged.
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            Some("fb") => CameraKind::Feedback,
            Some("usb") => CameraKind::Usb,
            Some(other) if !other.is_empty() => {
                log::warn!(
                    "unrecognized camera type '{}', defaulting to mipi cam",
                    other
                );
                CameraKind::Mipi
            }
            _ => CameraKind::Mipi,
        }
    }

    /// Whether this source publishes raw frames into shared memory.
    ///
    /// Feedback and MIPI sources emit NV12 buffers over the zero-copy
    /// transport and need the encode codec to produce a ROS image topic; the
    /// USB driver publishes a ROS topic directly and needs the inverse.
    pub fn shared_mem_output(&self) -> bool {
        match self {
            CameraKind::Feedback | CameraKind::Mipi => true,
            CameraKind::Usb => false,
        }
    }

    /// The launch argument naming this camera's device (or picture) input.
    pub fn device_argument(&self) -> DeclareArgumentAction {
        match self {
            CameraKind::Feedback => {
                DeclareArgumentAction::new("picture", "./config/images/2.jpg", "feedback picture")
            }
            CameraKind::Usb => {
                DeclareArgumentAction::new("device", "/dev/video8", "usb camera device")
            }
            CameraKind::Mipi => {
                DeclareArgumentAction::new("device", "GC4663", "mipi camera device")
            }
        }
    }

    /// Human-readable source label for logs and the topology printout.
    pub fn label(&self) -> &'static str {
        match self {
            CameraKind::Feedback => "feedback",
            CameraKind::Usb => "usb camera",
            CameraKind::Mipi => "mipi cam",
        }
    }
}
