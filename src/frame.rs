use crate::dom;
use moon_core::render::Renderer;
use moon_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub renderer: Renderer<'static>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = dom::canvas_viewport(&self.canvas);
        if viewport != self.renderer.size() && !viewport.is_empty() {
            self.renderer.resize(viewport);
            if let Err(e) = self.session.borrow_mut().resize(viewport) {
                log::warn!("[frame] resize: {e}");
            }
        }

        let snapshot = match self.session.borrow_mut().frame() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[frame] {e}");
                return;
            }
        };
        match self.renderer.render(&snapshot) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure()
            }
            Err(e) => log::debug!("[frame] surface: {e:?}"),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
