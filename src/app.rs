// app.rs - Application context and lifecycle
//
// One `App` per page. It owns every listener, both reveal watchers and the
// render loop; dropping it (see `shutdown`) detaches all of them. Shared
// mutable state lives in `AppState` behind an `Rc<RefCell<_>>` handed to
// each closure that needs it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use crate::config::SiteConfig;
use crate::contact::Submitter;
use crate::dom::{self, CanvasSurface, Listener, Page, RevealWatcher};
use crate::effects::normalize_pointer;
use crate::error::{Result, SiteError};
use crate::render::{Encoder, Viewport};
use crate::rng::Rng;
use crate::scene::Scene;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Scene plus the surface it is drawn on. Exists once the canvas mounts.
pub struct Stage {
    pub scene: Scene,
    pub surface: CanvasSurface,
    encoder: Encoder,
}

impl Stage {
    pub fn new(scene: Scene, surface: CanvasSurface) -> Self {
        Self { scene, surface, encoder: Encoder::new() }
    }

    pub fn frame(&mut self) {
        self.scene.tick();
        self.encoder.encode(&self.scene, self.surface.viewport());
        self.surface.paint(self.encoder.ops());
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.scene.resize(viewport.css_width as f32, viewport.css_height as f32);
        self.surface.set_size(viewport);
    }
}

#[derive(Default)]
pub struct AppState {
    pub stage: Option<Stage>,
    /// Last normalized pointer position, [-1, 1]
    pub mouse: (f32, f32),
}

pub struct App {
    page: Page,
    config: SiteConfig,
    state: Rc<RefCell<AppState>>,
    last_scroll: Rc<Cell<f64>>,
    listeners: RefCell<Vec<Listener>>,
    watchers: RefCell<Vec<RevealWatcher>>,
    render_loop: RefCell<Option<RenderLoop>>,
}

/// Wire the page once. Later calls log and hand back the running instance.
/// A missing canvas is returned as an error after the page effects are live.
pub fn boot(config: SiteConfig, submitter: Rc<dyn Submitter>) -> Result<Rc<App>> {
    if let Some(app) = APP.with(|slot| slot.borrow().clone()) {
        log::warn!("site already started; reusing running instance");
        return Ok(app);
    }

    let app = Rc::new(App::new(Page::current()?, config));
    app.wire(submitter)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));
    log::info!("page effects wired");

    // Page effects stay attached when the canvas is missing
    App::mount_when_loaded(&app)?;
    Ok(app)
}

/// Stop rendering and detach every handler.
pub fn shutdown() {
    if let Some(app) = APP.with(|slot| slot.borrow_mut().take()) {
        app.stop();
        log::info!("site shut down");
    }
}

pub fn running() -> Option<Rc<App>> {
    APP.with(|slot| slot.borrow().clone())
}

impl App {
    pub fn new(page: Page, config: SiteConfig) -> Self {
        Self {
            page,
            config,
            state: Rc::new(RefCell::new(AppState::default())),
            last_scroll: Rc::new(Cell::new(0.0)),
            listeners: RefCell::new(Vec::new()),
            watchers: RefCell::new(Vec::new()),
            render_loop: RefCell::new(None),
        }
    }

    pub fn state(&self) -> &Rc<RefCell<AppState>> { &self.state }

    pub fn last_scroll(&self) -> f64 { self.last_scroll.get() }

    pub fn is_rendering(&self) -> bool {
        self.render_loop.borrow().as_ref().is_some_and(RenderLoop::is_running)
    }

    /// Attach everything that does not need the canvas. Element sets are
    /// snapshotted here; nodes inserted later are not tracked.
    pub fn wire(&self, submitter: Rc<dyn Submitter>) -> Result<()> {
        let mut listeners = dom::wire_nav(&self.page, &self.config)?;
        listeners.extend(dom::wire_scroll(&self.page, &self.config, self.last_scroll.clone())?);
        listeners.extend(dom::wire_contact(&self.page, &self.config, submitter)?);
        listeners.push(self.wire_resize()?);
        listeners.push(self.wire_pointer()?);
        self.listeners.borrow_mut().extend(listeners);

        let mut watchers = self.watchers.borrow_mut();
        watchers.push(RevealWatcher::watch_all(&self.page, &self.config.reveal_targets, self.config.reveal.clone())?);
        watchers.push(RevealWatcher::watch_all(&self.page, &self.config.skill_bars, self.config.skill_reveal.clone())?);
        Ok(())
    }

    fn wire_resize(&self) -> Result<Listener> {
        let page = self.page.clone();
        let state = self.state.clone();
        Listener::new(&self.page.window, "resize", move |_| {
            let (w, h) = page.viewport();
            if let Some(stage) = state.borrow_mut().stage.as_mut() {
                stage.resize(Viewport::new(w, h, page.pixel_ratio()));
            }
        })
    }

    fn wire_pointer(&self) -> Result<Listener> {
        let page = self.page.clone();
        let state = self.state.clone();
        Listener::new(&self.page.document, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
            let (w, h) = page.viewport();
            let (x, y) = normalize_pointer(event.client_x() as f64, event.client_y() as f64, w, h);
            let mut state = state.borrow_mut();
            state.mouse = (x, y);
            if let Some(stage) = state.stage.as_mut() {
                stage.scene.aim(x, y);
            }
        })
    }

    /// Mount now if the page already finished loading, else on `load`.
    fn mount_when_loaded(app: &Rc<Self>) -> Result<()> {
        if app.page.document.ready_state() == "complete" {
            return app.mount();
        }
        let weak: Weak<Self> = Rc::downgrade(app);
        let listener = Listener::new(&app.page.window, "load", move |_| {
            let Some(app) = weak.upgrade() else { return };
            if let Err(err) = app.mount() {
                log::error!("background disabled: {err}");
            }
        })?;
        app.listeners.borrow_mut().push(listener);
        Ok(())
    }

    /// Build the scene on `#canvas_id` and start the render loop. A second
    /// call is a no-op.
    pub fn mount(&self) -> Result<()> {
        if self.state.borrow().stage.is_some() {
            log::warn!("background already mounted");
            return Ok(());
        }

        let id = &self.config.canvas_id;
        let canvas = self
            .page
            .document
            .get_element_by_id(id)
            .ok_or_else(|| SiteError::MissingMount(format!("#{id}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SiteError::WrongElement(format!("#{id}"), "canvas"))?;

        let (w, h) = self.page.viewport();
        let viewport = Viewport::new(w, h, self.page.pixel_ratio());
        let scene = Scene::new(w as f32, h as f32, &mut Rng::from_browser());
        let surface = CanvasSurface::new(canvas, viewport)?;
        self.state.borrow_mut().stage = Some(Stage::new(scene, surface));

        let state = self.state.clone();
        let render_loop = RenderLoop::start(&self.page.window, move || {
            if let Some(stage) = state.borrow_mut().stage.as_mut() {
                stage.frame();
            }
        })?;
        *self.render_loop.borrow_mut() = Some(render_loop);

        log::info!("background mounted at {}x{} (ratio {})", w, h, viewport.pixel_ratio);
        Ok(())
    }

    pub fn stop(&self) {
        if let Some(render_loop) = self.render_loop.borrow_mut().take() {
            render_loop.stop();
        }
        self.listeners.borrow_mut().clear();
        self.watchers.borrow_mut().clear();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-rescheduling `requestAnimationFrame` loop with an explicit stop.
pub struct RenderLoop {
    window: Window,
    frame: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl RenderLoop {
    pub fn start<F>(window: &Window, mut on_frame: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let next = frame.clone();
        let again = callback.clone();
        let win = window.clone();
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
            // Cancelled between scheduling and firing
            if next.get().is_none() { return; }
            on_frame();
            let Some(cb) = again.borrow().as_ref().map(|cb| cb.as_ref().clone()) else { return };
            match win.request_animation_frame(cb.unchecked_ref()) {
                Ok(id) => next.set(Some(id)),
                Err(err) => {
                    log::error!("render loop halted: {}", SiteError::js(err));
                    next.set(None);
                }
            }
        }));

        let id = {
            let cb = callback.borrow();
            let cb = cb.as_ref().ok_or_else(|| SiteError::Js("frame callback missing".into()))?;
            window.request_animation_frame(cb.as_ref().unchecked_ref()).map_err(SiteError::js)?
        };
        frame.set(Some(id));

        Ok(Self { window: window.clone(), frame, callback })
    }

    pub fn is_running(&self) -> bool {
        self.frame.get().is_some()
    }

    pub fn stop(&self) {
        if let Some(id) = self.frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure's reference to itself
        self.callback.borrow_mut().take();
    }
}
