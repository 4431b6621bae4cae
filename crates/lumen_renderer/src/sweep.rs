//! Camera sweep: a sequence of frames orbiting the camera about the Y axis.

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult, OutputResult, RenderError, RenderResult};
use crate::{render_frame, Camera, CameraSettings, Frame, Progress, RenderConfig, Scene};

/// How many frames to render and how far to orbit between them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub frames: u32,
    /// Rotation of `look_from` between consecutive frames, in radians
    pub angle_step: f32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            frames: 1,
            angle_step: 0.01,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.frames == 0 {
            return Err(ConfigError::NoFrames);
        }
        Ok(())
    }

    /// Camera settings for frame `index`.
    pub fn camera_for(&self, base: &CameraSettings, index: u32) -> CameraSettings {
        base.orbit(index as f32 * self.angle_step)
    }
}

/// Render every frame of the sweep, one after another.
///
/// Each frame gets a freshly built camera and the seed `config.seed + index`.
/// `sink` receives the frame index and the finished frame; its first error
/// stops the sweep.
pub fn render_sweep<F>(
    scene: &Scene,
    camera: &CameraSettings,
    config: &RenderConfig,
    sweep: &SweepConfig,
    progress: &dyn Progress,
    mut sink: F,
) -> RenderResult<()>
where
    F: FnMut(u32, Frame) -> OutputResult<()>,
{
    sweep.validate()?;
    config.validate()?;

    for index in 0..sweep.frames {
        log::info!("Frame {} of {}", index + 1, sweep.frames);

        let settings = sweep.camera_for(camera, index);
        let frame_camera = Camera::new(&settings, config.aspect_ratio);
        let frame_config = RenderConfig {
            seed: config.seed.wrapping_add(u64::from(index)),
            ..config.clone()
        };

        let frame = render_frame(&frame_camera, scene, &frame_config, progress)?;
        sink(index, frame).map_err(|source| RenderError::Output {
            frame: index,
            source,
        })?;
    }

    Ok(())
}
