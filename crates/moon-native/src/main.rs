mod input;

use anyhow::Context;
use moon_core::render::Renderer;
use moon_core::{Catalog, SceneConfig, Session, TextureImage, Viewport};
use std::path::PathBuf;
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::EventLoop,
    window::WindowBuilder,
};

use input::{key_action, wheel_zoom, Action, DragState};

fn viewport_of(size: PhysicalSize<u32>) -> Viewport {
    Viewport::new(size.width, size.height)
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&text)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    log::info!("loaded {} events from {}", catalog.len(), path.display());
    Ok(catalog)
}

fn load_texture(config: &SceneConfig) -> anyhow::Result<TextureImage> {
    let path = std::env::var_os("MOON_TEXTURE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.texture_path));
    let bytes =
        std::fs::read(&path).with_context(|| format!("reading texture {}", path.display()))?;
    TextureImage::decode(&bytes)
}

fn apply(session: &mut Session, action: Action) {
    let result = match action {
        Action::Select(index) => session.select(index),
        Action::Next => session.select_next(),
        Action::Prev => session.select_prev(),
        Action::Quit => return,
    };
    match result {
        Ok(_) => {
            if let Some(event) = session.selected().and_then(|i| session.catalog().get(i).ok()) {
                log::info!("selected {}", event.timestamp);
            }
        }
        Err(e) => log::warn!("selection ignored: {e}"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = SceneConfig::default();
    let catalog = load_catalog(std::env::args_os().nth(1).map(PathBuf::from))?;
    let texture = load_texture(&config)?;

    for (i, event) in catalog.iter().enumerate().take(9) {
        log::info!("[{}] {} (M{:.1})", i + 1, event.timestamp, event.magnitude);
    }

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Moon Markers")
        .with_inner_size(PhysicalSize::new(1280, 720))
        .build(&event_loop)?;

    let viewport = viewport_of(window.inner_size());
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let mut renderer =
        pollster::block_on(Renderer::new(&instance, surface, viewport, &config, &texture))?;

    let mut session = Session::new(catalog, config);
    session.mount(viewport)?;
    let mut drag = DragState::default();
    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                renderer.resize(viewport_of(size));
                if let Err(e) = session.resize(viewport_of(size)) {
                    log::warn!("resize: {e}");
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match key_action(&logical_key) {
                Some(Action::Quit) => elwt.exit(),
                Some(action) => apply(&mut session, action),
                None => {}
            },
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => drag.press(),
                ElementState::Released => drag.release(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                if let Some((dx, dy)) = drag.moved(position.x, position.y) {
                    if let Err(e) = session.orbit(dx, dy) {
                        log::debug!("orbit ignored: {e}");
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                if let Err(e) = session.zoom(wheel_zoom(delta)) {
                    log::debug!("zoom ignored: {e}");
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            let frame = match session.frame() {
                Ok(frame) => frame,
                Err(e) => {
                    log::warn!("frame skipped: {e}");
                    return;
                }
            };
            match renderer.render(&frame) {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::debug!("surface: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
