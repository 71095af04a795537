use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{Fog, FloatMotion, HandSlot, OrbitCamera, SceneLighting, SceneUniforms, Session};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT_SEC;
use crate::overlay;
use crate::render;
use crate::status::CaptureStatus;

pub struct FrameContext<'a> {
    pub session: Session,
    pub slot: HandSlot,
    pub status: CaptureStatus,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub camera: OrbitCamera,
    pub float: FloatMotion,
    pub fog: Fog,

    pub start_instant: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let time = (now - self.start_instant).as_secs_f32();

        if !self.status.accepts_hands() && self.slot.is_ready() && self.status.camera_ready() {
            log::info!("[frame] camera live");
            overlay::apply(&self.document, &self.status);
        }
        // Samples pushed before the camera reports ready are ignored
        let hand = if self.status.accepts_hands() {
            self.slot.latest()
        } else {
            None
        };

        self.session.frame(time, hand);
        let mode = self.session.mode();
        self.camera.advance(dt_sec, mode);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let (w, h) = g.size();
            self.camera.set_viewport(w, h);
            let uniforms = SceneUniforms::new(
                &self.camera,
                &self.float,
                &self.fog,
                &SceneLighting::for_mode(mode),
                time,
            );
            if let Err(e) = g.render(self.session.instances(), &uniforms) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
