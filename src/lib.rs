//! parking_bringup library

pub mod actions;
pub mod ament;
pub mod camera;
pub mod description;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod substitution;

use error::Result;
use record::{LaunchRecord, RecordGenerator};
use substitution::LaunchContext;

/// Compose the pipeline for a camera selector and resolve it into a record.
///
/// The selector is the raw `CAM_TYPE` value; `None` or an unrecognized value
/// selects the MIPI camera. Launch argument overrides already set on the
/// context win over declared defaults.
pub fn generate_record(
    selector: Option<&str>,
    context: &mut LaunchContext,
) -> Result<LaunchRecord> {
    let description = pipeline::compose_from_selector(selector);
    RecordGenerator::generate(&description, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn install_package(prefix: &Path, package: &str, launch_files: &[&str]) {
        let launch_dir = prefix.join("share").join(package).join("launch");
        fs::create_dir_all(&launch_dir).unwrap();
        for file in launch_files {
            fs::write(launch_dir.join(file), b"").unwrap();
        }
    }

    fn install_pipeline(prefix: &Path) {
        install_package(prefix, "hobot_shm", &["hobot_shm.launch.py"]);
        install_package(prefix, "mipi_cam", &["mipi_cam.launch.py"]);
        install_package(prefix, "hobot_usb_cam", &["hobot_usb_cam.launch.py"]);
        install_package(
            prefix,
            "hobot_image_publisher",
            &["hobot_image_publisher.launch.py"],
        );
        install_package(
            prefix,
            "hobot_codec",
            &["hobot_codec_encode.launch.py", "hobot_codec_decode.launch.py"],
        );
        install_package(prefix, "websocket", &["websocket.launch.py"]);

        let bin_dir = prefix.join("lib").join("parking_perception");
        fs::create_dir_all(&bin_dir).unwrap();
        fs::write(bin_dir.join("parking_perception"), b"").unwrap();
    }

    fn context_for(prefix: &Path) -> LaunchContext {
        let mut context = LaunchContext::new();
        context.set_env("AMENT_PREFIX_PATH", prefix.to_str().unwrap());
        context
    }

    #[test]
    fn test_generate_default_record() {
        let temp = tempfile::tempdir().unwrap();
        install_pipeline(temp.path());

        let mut context = context_for(temp.path());
        let record = generate_record(None, &mut context).unwrap();

        assert_eq!(record.include.len(), 4);
        assert_eq!(record.node.len(), 1);
        assert_eq!(record.include[1].package, "mipi_cam");
        assert_eq!(record.variables.get("device"), Some(&"GC4663".to_string()));
    }

    #[test]
    fn test_generate_usb_with_override() {
        let temp = tempfile::tempdir().unwrap();
        install_pipeline(temp.path());

        let mut context = context_for(temp.path());
        context.set_configuration("device".to_string(), "/dev/video0".to_string());
        let record = generate_record(Some("usb"), &mut context).unwrap();

        let usb = &record.include[1];
        assert_eq!(usb.package, "hobot_usb_cam");
        assert!(usb
            .args
            .contains(&("usb_video_device".to_string(), "/dev/video0".to_string())));
        assert_eq!(
            record.variables.get("device"),
            Some(&"/dev/video0".to_string())
        );
    }

    #[test]
    fn test_generate_without_installed_packages() {
        let temp = tempfile::tempdir().unwrap();
        let mut context = context_for(temp.path());
        assert!(generate_record(Some("fb"), &mut context).is_err());
    }
}
