use winit::event_loop::{ControlFlow, EventLoop};

use stardrift::app::App;
use stardrift::assets::{self, ShaderCatalog};
use stardrift::error::AppError;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,wgpu=warn,naga=warn")),
        )
        .init();

    let shaders = ShaderCatalog::load(&[
        assets::MESH_SHADER,
        assets::POINT_SHADER,
        assets::HALO_SHADER,
        assets::BLOOM_SHADER,
    ])?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(shaders);
    event_loop.run_app(&mut app)?;
    Ok(())
}
