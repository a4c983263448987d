use crate::dom;
use crate::input::{self, DragState};
use crate::ui;
use glam::Vec2;
use moon_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        (canvas.width(), canvas.height()),
    )
}

fn listen<E>(target: &web::EventTarget, kind: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    dyn FnMut(E): wasm_bindgen::closure::WasmClosure,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        let pos = pointer_canvas_px(&ev, &w.canvas);
        w.drag.borrow_mut().begin(ev.pointer_id(), pos);
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let delta = w.drag.borrow_mut().update(ev.pointer_id(), pos);
        if let Some(d) = delta {
            if let Err(e) = w.session.borrow_mut().orbit(d.x, d.y) {
                log::debug!("orbit ignored: {e}");
            }
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    for kind in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let canvas = w.canvas.clone();
        listen(&canvas, kind, move |ev: web::PointerEvent| {
            if w.drag.borrow_mut().end(ev.pointer_id()) {
                _ = w.canvas.release_pointer_capture(ev.pointer_id());
            }
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    listen(&canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let steps = input::wheel_steps(ev.delta_y(), ev.delta_mode());
        let mut session = w.session.borrow_mut();
        for _ in 0..steps.unsigned_abs() {
            if session.zoom(steps.signum() as f32).is_err() {
                break;
            }
        }
    });
}

/// Visualize the chosen event whenever the `<select>` value changes.
pub fn wire_select_change(document: &web::Document, session: Rc<RefCell<Session>>) {
    let Some(select) = ui::select_element(document) else {
        log::warn!("event selector missing; selection disabled");
        return;
    };
    let select_for_cb = select.clone();
    listen(&select, "change", move |_ev: web::Event| {
        let Some(index) = ui::selected_index(&select_for_cb) else {
            return;
        };
        let mut session = session.borrow_mut();
        match session.select(index) {
            Ok(_) => {
                if let Ok(event) = session.catalog().get(index) {
                    log::info!("[select] {}", event.timestamp);
                }
            }
            Err(e) => log::warn!("[select] {e}"),
        }
    });
}

/// Keep the canvas backing store matched to its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        listen(&window, "resize", move |_ev: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}
