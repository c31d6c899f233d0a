//! Pipeline composition
//!
//! Builds the full parking perception launch description for a camera
//! backend. Composition is deterministic and side-effect free: the camera
//! selection is passed in, never read from the process environment here.

use crate::actions::IncludeLaunchAction;
use crate::camera::CameraKind;
use crate::description::{LaunchAction, LaunchDescription};
use crate::pipeline::stages;

/// Which way the codec bridges shared-memory and ROS image transport.
///
/// Exactly one codec runs per pipeline. Cameras that already publish into
/// shared memory need an encoder to feed the web display; the USB camera
/// publishes ROS images and needs a decoder to feed perception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDirection {
    /// Shared-memory NV12 in, ROS JPEG out.
    Encode,
    /// ROS JPEG in, shared-memory NV12 out.
    Decode,
}

impl CodecDirection {
    /// Picks the direction that complements the camera's output transport.
    pub fn for_source(camera: CameraKind) -> Self {
        if camera.shared_mem_output() {
            CodecDirection::Encode
        } else {
            CodecDirection::Decode
        }
    }

    fn stage(&self) -> IncludeLaunchAction {
        match self {
            CodecDirection::Encode => stages::jpeg_encoder(),
            CodecDirection::Decode => stages::nv12_decoder(),
        }
    }
}

/// Composes the launch description for the given camera backend.
///
/// Stage order is fixed: the camera's device argument, shared-memory setup,
/// the camera source, the codec, the perception topic argument, the
/// perception node, and the web display.
pub fn compose(camera: CameraKind) -> LaunchDescription {
    log::info!("using {}", camera.label());
    let codec = CodecDirection::for_source(camera);

    let mut description = LaunchDescription::new();
    description.push(LaunchAction::DeclareArgument(camera.device_argument()));
    description.push(LaunchAction::Include(stages::shared_mem_setup()));
    description.push(LaunchAction::Include(stages::camera_source(camera)));
    description.push(LaunchAction::Include(codec.stage()));
    description.push(LaunchAction::DeclareArgument(
        stages::perception_topic_argument(),
    ));
    description.push(LaunchAction::Node(stages::perception_node()));
    description.push(LaunchAction::Include(stages::web_display()));
    description
}

/// Composes from a raw selector string, as read from `CAM_TYPE`.
pub fn compose_from_selector(selector: Option<&str>) -> LaunchDescription {
    log::debug!("camera_type is {:?}", selector);
    compose(CameraKind::from_selector(selector))
}
