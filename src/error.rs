//! Error types for initialization.
//!
//! Everything that can fail does so before the tick loop starts: shader
//! assets load from disk, then the GPU stack comes up. Per-tick code has no
//! error paths. Failures surface once at the top of `main` and are fatal.

use std::fmt;
use std::path::PathBuf;

/// Errors from loading shader text assets.
#[derive(Debug)]
pub enum AssetError {
    /// Reading a shader file failed. The whole batch is abandoned.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A shader was requested that the loaded catalog does not contain.
    Missing(PathBuf),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => {
                write!(f, "failed to read shader {}: {}", path.display(), source)
            }
            AssetError::Missing(path) => {
                write!(f, "shader {} not present in the loaded catalog", path.display())
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::Missing(_) => None,
        }
    }
}

/// Errors from bringing up the GPU stack.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create the GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// A pipeline asked for a shader the catalog never loaded.
    Shader(AssetError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(
                f,
                "no compatible GPU adapter found; a Vulkan/Metal/DX12 capable GPU is required"
            ),
            GpuError::DeviceCreation(e) => write!(f, "failed to create GPU device: {}", e),
            GpuError::Shader(e) => write!(f, "shader unavailable: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::Shader(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

impl From<AssetError> for GpuError {
    fn from(e: AssetError) -> Self {
        GpuError::Shader(e)
    }
}

/// Top-level application errors.
#[derive(Debug)]
pub enum AppError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Shader assets failed to load.
    Assets(AssetError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EventLoop(e) => write!(f, "failed to create event loop: {}", e),
            AppError::Assets(e) => write!(f, "asset error: {}", e),
            AppError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EventLoop(e) => Some(e),
            AppError::Assets(e) => Some(e),
            AppError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for AppError {
    fn from(e: winit::error::EventLoopError) -> Self {
        AppError::EventLoop(e)
    }
}

impl From<AssetError> for AppError {
    fn from(e: AssetError) -> Self {
        AppError::Assets(e)
    }
}

impl From<GpuError> for AppError {
    fn from(e: GpuError) -> Self {
        AppError::Gpu(e)
    }
}
