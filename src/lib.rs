#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tree_core::{Fog, FloatMotion, OrbitCamera, Session, SessionConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bridge;
mod constants;
mod dom;
mod frame;
mod overlay;
mod render;
mod status;
mod viewport;

pub use bridge::{camera_ready, clear_hand, push_hand_landmarks};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    let status = status::CaptureStatus::default();
    overlay::init_texts(&document);
    overlay::apply(&document, &status);

    // Maintain canvas internal pixel size to match CSS size * clamped devicePixelRatio
    wire_canvas_resize(&canvas);

    let session = Session::new(SessionConfig::default());
    bridge::set_thresholds(*session.gesture_thresholds());
    let gpu = frame::init_gpu(&canvas, session.field().len()).await;

    let mut camera = OrbitCamera::default();
    camera.set_viewport(canvas.width(), canvas.height());
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        slot: bridge::slot(),
        status,
        document,
        canvas,
        gpu,
        camera,
        float: FloatMotion::default(),
        fog: Fog::default(),
        start_instant: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
