//! Pipeline stage descriptors
//!
//! One constructor per external collaborator. The packages referenced here
//! are opaque: only their launch-file names and argument strings are part of
//! this crate's contract. Topic names are the wire contract between stages.

use crate::actions::{DeclareArgumentAction, IncludeLaunchAction, NodeAction};
use crate::camera::CameraKind;
use crate::substitution::Expr;

/// Zero-copy raw-image topic shared by colocated processes.
pub const SHARED_MEM_IMAGE_TOPIC: &str = "/hbmem_img";

/// Transport-level JPEG image topic consumed by the web display.
pub const ROS_IMAGE_TOPIC: &str = "/image";

/// Default topic carrying the perception node's detection messages.
pub const DEFAULT_PERCEPTION_TOPIC: &str = "/ai_msg_parking_perception";

/// Zero-copy environment initialization. Must be part of every composition
/// that touches the shared-memory transport, which is all of them (one side
/// of the codec is always shared-memory).
pub fn shared_mem_setup() -> IncludeLaunchAction {
    IncludeLaunchAction::new("hobot_shm", "hobot_shm.launch.py")
}

/// Camera source stage for the selected backend.
pub fn camera_source(camera: CameraKind) -> IncludeLaunchAction {
    match camera {
        CameraKind::Feedback => feedback_publisher(),
        CameraKind::Usb => usb_camera(),
        CameraKind::Mipi => mipi_camera(),
    }
}

/// Replays the `picture` image in a loop into shared memory.
fn feedback_publisher() -> IncludeLaunchAction {
    IncludeLaunchAction::new("hobot_image_publisher", "hobot_image_publisher.launch.py")
        .with_argument("publish_image_source", Expr::config("picture"))
        .with_argument("publish_image_format", Expr::literal("jpg"))
        .with_argument("publish_output_image_w", Expr::literal("640"))
        .with_argument("publish_output_image_h", Expr::literal("320"))
        .with_argument(
            "publish_message_topic_name",
            Expr::literal(SHARED_MEM_IMAGE_TOPIC),
        )
        .with_argument("publish_is_loop", Expr::literal("True"))
}

/// USB camera driver, publishing a ROS image topic directly.
fn usb_camera() -> IncludeLaunchAction {
    IncludeLaunchAction::new("hobot_usb_cam", "hobot_usb_cam.launch.py")
        .with_argument("usb_image_width", Expr::literal("640"))
        .with_argument("usb_image_height", Expr::literal("320"))
        .with_argument("usb_video_device", Expr::config("device"))
}

/// Onboard MIPI camera driver, publishing into shared memory.
fn mipi_camera() -> IncludeLaunchAction {
    IncludeLaunchAction::new("mipi_cam", "mipi_cam.launch.py")
        .with_argument("mipi_image_width", Expr::literal("640"))
        .with_argument("mipi_image_height", Expr::literal("320"))
        .with_argument("mipi_io_method", Expr::literal("shared_mem"))
        .with_argument("mipi_video_device", Expr::config("device"))
}

/// NV12-to-JPEG encoder: shared-memory frames in, ROS image topic out.
pub fn jpeg_encoder() -> IncludeLaunchAction {
    IncludeLaunchAction::new("hobot_codec", "hobot_codec_encode.launch.py")
        .with_argument("codec_in_mode", Expr::literal("shared_mem"))
        .with_argument("codec_out_mode", Expr::literal("ros"))
        .with_argument("codec_sub_topic", Expr::literal(SHARED_MEM_IMAGE_TOPIC))
        .with_argument("codec_pub_topic", Expr::literal(ROS_IMAGE_TOPIC))
}

/// JPEG-to-NV12 decoder: ROS image topic in, shared-memory frames out.
pub fn nv12_decoder() -> IncludeLaunchAction {
    IncludeLaunchAction::new("hobot_codec", "hobot_codec_decode.launch.py")
        .with_argument("codec_in_mode", Expr::literal("ros"))
        .with_argument("codec_out_mode", Expr::literal("shared_mem"))
        .with_argument("codec_sub_topic", Expr::literal(ROS_IMAGE_TOPIC))
        .with_argument("codec_pub_topic", Expr::literal(SHARED_MEM_IMAGE_TOPIC))
}

/// Launch argument naming the perception output topic.
pub fn perception_topic_argument() -> DeclareArgumentAction {
    DeclareArgumentAction::new(
        "parking_perception_pub_topic",
        DEFAULT_PERCEPTION_TOPIC,
        "parking perception ai message publish topic",
    )
}

/// The parking perception algorithm node.
pub fn perception_node() -> NodeAction {
    NodeAction::new("parking_perception", "parking_perception")
        .with_output("screen")
        .with_parameter(
            "ai_msg_pub_topic_name",
            Expr::config("parking_perception_pub_topic"),
        )
        .with_parameter("dump_render_img", Expr::literal("0"))
        .with_ros_arg("--log-level")
        .with_ros_arg("warn")
}

/// Web visualization service, framing `/image` as MJPEG.
///
/// The detection topic is the literal default, not the
/// `parking_perception_pub_topic` configuration: overriding that argument
/// re-points the perception output but not the web subscriber.
pub fn web_display() -> IncludeLaunchAction {
    IncludeLaunchAction::new("websocket", "websocket.launch.py")
        .with_argument("websocket_image_topic", Expr::literal(ROS_IMAGE_TOPIC))
        .with_argument("websocket_image_type", Expr::literal("mjpeg"))
        .with_argument(
            "websocket_smart_topic",
            Expr::literal(DEFAULT_PERCEPTION_TOPIC),
        )
}
