//! Error types for configuration, rendering and image output.

use thiserror::Error;

/// Invalid render, camera or sweep settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Image width must be at least 2 pixels, got {0}")]
    ImageWidth(u32),

    #[error("Derived image height must be at least 2 pixels, got {0}")]
    ImageHeight(u32),

    #[error("Aspect ratio must be positive and finite, got {0}")]
    AspectRatio(f32),

    #[error("Samples per pixel must be at least 1")]
    NoSamples,

    #[error("Thread count must be at least 1")]
    NoThreads,

    #[error("A sweep needs at least one frame")]
    NoFrames,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while writing a frame to disk.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Errors that abort a render or a sweep.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to start render workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to write frame {frame}: {source}")]
    Output {
        frame: u32,
        #[source]
        source: OutputError,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;
