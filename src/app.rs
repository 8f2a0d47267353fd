//! winit application shell: window lifecycle, event routing and the
//! per-frame tick/render loop.

use std::sync::Arc;

use tracing::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::assets::ShaderCatalog;
use crate::gpu::GpuState;
use crate::input::Input;
use crate::scene::Scene;
use crate::settings::{SettingsEvent, SettingsPanel};
use crate::time::Time;

pub struct App {
    shaders: ShaderCatalog,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    scene: Scene,
    panel: SettingsPanel,
    input: Input,
    time: Time,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
}

impl App {
    pub fn new(shaders: ShaderCatalog) -> Self {
        let scene = Scene::new();
        let panel = SettingsPanel::new(scene.galaxy_params, Default::default());
        Self {
            shaders,
            window: None,
            gpu: None,
            scene,
            panel,
            input: Input::new(),
            time: Time::new(),
            mouse_pressed: false,
            last_mouse_pos: None,
        }
    }

    fn apply_events(&mut self, events: Vec<SettingsEvent>) {
        for event in events {
            match event {
                SettingsEvent::RegenerateGalaxy(params) => {
                    self.scene.regenerate_galaxy(params);
                }
                SettingsEvent::SetFlightMode(enabled) => {
                    self.scene.set_flight_mode(enabled);
                }
                SettingsEvent::ReverseSpacecraft => {
                    self.scene.reverse_spacecraft();
                }
                SettingsEvent::SetBloom(settings) => {
                    if let Some(gpu) = &mut self.gpu {
                        gpu.set_bloom(settings);
                    }
                }
                SettingsEvent::GoToGalaxy => {
                    self.scene.go_to_galaxy();
                }
                SettingsEvent::LogCamera => {
                    let position = self.scene.camera.position();
                    let target = self.scene.camera.target();
                    info!(?position, ?target, "camera pose");
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu)) = (self.window.as_ref(), self.gpu.as_mut()) else {
            return;
        };

        let (elapsed, delta) = self.time.update();
        self.scene.tick(delta, self.input.mouse_position());

        let panel = &mut self.panel;
        let mut events = Vec::new();
        let result = gpu.render(window, &self.scene, elapsed, delta, |ctx| {
            panel.ui(ctx, &mut events);
        });

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => {
                let size = winit::dpi::PhysicalSize {
                    width: gpu.config.width,
                    height: gpu.config.height,
                };
                gpu.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => error!("render error: {e:?}"),
        }

        window.request_redraw();
        self.apply_events(events);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Stardrift")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(GpuState::new(
            window.clone(),
            &self.shaders,
            &self.scene,
            Default::default(),
        )) {
            Ok(gpu) => {
                self.window = Some(window);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                error!("GPU initialization failed: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // The UI gets first refusal; events it consumes never reach the
        // camera or the spacecraft. Lifecycle events below still apply.
        let ui_consumed = match (self.window.as_ref(), self.gpu.as_mut()) {
            (Some(window), Some(gpu)) => gpu.egui.on_window_event(window, &event),
            _ => false,
        };

        if !ui_consumed {
            if let Some(transition) = self.input.handle_event(&event) {
                self.scene.handle_key(transition);
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ if ui_consumed => {}
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = (position.x - last_x) as f32;
                        let dy = (position.y - last_y) as f32;
                        self.scene.camera.rotate(dx, dy);
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                self.scene.camera.zoom(scroll);
            }
            _ => {}
        }
    }
}
