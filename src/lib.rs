#![cfg(target_arch = "wasm32")]
use moon_core::render::Renderer;
use moon_core::{Catalog, SceneConfig, Session, TextureImage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod ui;

use constants::{CANVAS_ID, LAUNCH_BUTTON_ID, TEXTURE_URL};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("moon-markers starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_launch_button(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, LAUNCH_BUTTON_ID, move || {
        if overlay::selector_visible(&doc) {
            return;
        }
        overlay::show_selector(&doc);
        log::info!("[ui] selector shown");
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;

    ui::populate_landing(&document);
    overlay::show_landing(&document);
    wire_launch_button(&document);
    events::wire_canvas_resize(&canvas);

    let config = SceneConfig::default();
    let catalog = Catalog::builtin();
    ui::populate_selector(&document, &catalog)?;

    let texture = TextureImage::decode(&dom::fetch_bytes(TEXTURE_URL).await?)?;
    log::info!("[init] texture {}x{}", texture.width, texture.height);

    let viewport = dom::canvas_viewport(&canvas);
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let renderer = Renderer::new(&instance, surface, viewport, &config, &texture).await?;

    let mut session = Session::new(catalog, config);
    session.mount(viewport)?;
    let session = Rc::new(RefCell::new(session));

    events::wire_select_change(&document, session.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
        drag: Rc::new(RefCell::new(input::DragState::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        renderer,
        canvas,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
