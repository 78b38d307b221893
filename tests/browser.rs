// Browser tests: run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use site_fx::app::{self, App, RenderLoop};
use site_fx::contact::{ContactMessage, Submitter};
use site_fx::dom::{self, has_class, CanvasSurface, Page, RevealWatcher};
use site_fx::effects::{normalize_pointer, parallax};
use site_fx::render::Viewport;
use site_fx::reveal::{RevealEffect, RevealOptions};
use site_fx::{Result, SiteConfig, SiteError};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Element, Event, EventInit, HtmlCanvasElement, HtmlElement, HtmlFormElement, HtmlInputElement, MouseEvent,
    MouseEventInit, Window,
};

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> Page {
    Page::current().unwrap()
}

/// Replace the fixture's contents with `html`, leaving the runner's own
/// output alone.
fn mount(html: &str) -> Page {
    let page = page();
    let fixture = match page.document.get_element_by_id("fixture") {
        Some(el) => el,
        None => {
            let el = page.document.create_element("div").unwrap();
            el.set_id("fixture");
            page.document.body().unwrap().append_child(&el).unwrap();
            el
        }
    };
    fixture.set_inner_html(html);
    page
}

fn el(page: &Page, selector: &str) -> Element {
    page.query(selector).unwrap()
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

fn style_of(el: &Element, property: &str) -> String {
    el.dyn_ref::<HtmlElement>().unwrap().style().get_property_value(property).unwrap()
}

fn scroll_window(page: &Page, y: f64) {
    page.window.scroll_to_with_x_and_y(0.0, y);
    page.window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
}

/// Resolves on the next animation frame.
async fn next_frame(window: &Window) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        window.request_animation_frame(&resolve).unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn quiet_config() -> SiteConfig {
    SiteConfig { acknowledgement: None, ..SiteConfig::default() }
}

#[derive(Default)]
struct Recorder {
    sent: RefCell<Vec<ContactMessage>>,
}

impl Submitter for Recorder {
    fn submit(&self, message: &ContactMessage) -> Result<()> {
        self.sent.borrow_mut().push(message.clone());
        Ok(())
    }
}

#[wasm_bindgen_test]
fn nav_click_moves_active_and_closes_menu() {
    let page = mount(
        r##"<ul class="nav-menu active">
              <a class="nav-link active" href="#home">Home</a>
              <a class="nav-link" href="#missing">Gone</a>
            </ul>
            <section id="home"></section>"##,
    );
    let _listeners = dom::wire_nav(&page, &quiet_config()).unwrap();

    let links = page.query_all(".nav-link");
    click(&links[1]);

    assert!(!has_class(&links[0], "active"));
    assert!(has_class(&links[1], "active"));
    assert!(!has_class(&el(&page, ".nav-menu"), "active"));
}

#[wasm_bindgen_test]
fn menu_toggle_flips_class() {
    let page = mount(
        r#"<nav class="navbar"><button class="menu-toggle"></button><ul class="nav-menu"></ul></nav>
           <div style="height:5000px"></div>"#,
    );
    let _listeners = dom::wire_nav(&page, &quiet_config()).unwrap();

    let toggle = el(&page, ".menu-toggle");
    click(&toggle);
    assert!(has_class(&el(&page, ".nav-menu"), "active"));
    click(&toggle);
    assert!(!has_class(&el(&page, ".nav-menu"), "active"));
}

#[wasm_bindgen_test]
fn listeners_detach_on_drop() {
    let page = mount(
        r#"<nav class="navbar"><button class="menu-toggle"></button><ul class="nav-menu"></ul></nav>
           <div style="height:5000px"></div>"#,
    );
    drop(dom::wire_nav(&page, &quiet_config()).unwrap());

    click(&el(&page, ".menu-toggle"));
    assert!(!has_class(&el(&page, ".nav-menu"), "active"));
}

#[wasm_bindgen_test]
fn contact_submit_reports_and_clears() {
    let page = mount(
        r#"<form class="contact-form">
             <textarea name="message"></textarea>
             <input name="subject">
             <input name="email">
             <input name="name">
           </form>"#,
    );
    let recorder = Rc::new(Recorder::default());
    let _listener = dom::wire_contact(&page, &quiet_config(), recorder.clone()).unwrap().unwrap();

    for (name, value) in [("name", "Ann"), ("email", "a@x.com"), ("subject", "Hi")] {
        el(&page, &format!("[name=\"{name}\"]")).unchecked_into::<HtmlInputElement>().set_value(value);
    }
    el(&page, "[name=\"message\"]")
        .unchecked_into::<web_sys::HtmlTextAreaElement>()
        .set_value("Hello");

    let init = EventInit::new();
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).unwrap();
    let form: HtmlFormElement = el(&page, ".contact-form").unchecked_into();
    form.dispatch_event(&submit).unwrap();

    assert!(submit.default_prevented());
    assert_eq!(
        recorder.sent.borrow().as_slice(),
        &[ContactMessage {
            name: "Ann".into(),
            email: "a@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }]
    );
    for name in ["name", "email", "subject", "message"] {
        assert_eq!(dom::field_value(&form, name).as_deref(), Some(""));
    }
}

#[wasm_bindgen_test]
fn page_without_form_skips_contact() {
    let page = mount("<div></div>");
    let wired = dom::wire_contact(&page, &quiet_config(), Rc::new(Recorder::default())).unwrap();
    assert!(wired.is_none());
}

#[wasm_bindgen_test]
fn scroll_highlight_marks_last_matching_section() {
    let page = mount(
        r##"<a class="nav-link" href="#a"></a>
            <a class="nav-link active" href="#b"></a>
            <section id="a" style="height:400px"></section>
            <section id="b" style="height:400px"></section>"##,
    );
    let sections = page.query_all("section[id]");
    let links = page.query_all(".nav-link");
    let top_b = sections[1].dyn_ref::<HtmlElement>().unwrap().offset_top() as f64;

    // Just past the shared boundary: both ranges are half-open at the top
    dom::highlight(&sections, &links, "active", top_b - 50.0);
    assert!(!has_class(&links[0], "active"));
    assert!(has_class(&links[1], "active"));

    // Far below every section: nothing changes
    dom::highlight(&sections, &links, "active", 1e7);
    assert!(has_class(&links[1], "active"));
}

#[wasm_bindgen_test]
fn reveal_effects_apply() {
    let page = mount(r#"<div data-aos="fade"></div><div class="skill-progress"></div>"#);
    let block = el(&page, "[data-aos]");
    let bar = el(&page, ".skill-progress");

    dom::apply_effect(&RevealEffect::AddClass("aos-animate".into()), &block);
    dom::apply_effect(&RevealEffect::InlineAnimation("fillBar 1.5s ease-in-out forwards".into()), &bar);

    assert!(has_class(&block, "aos-animate"));
    let style = bar.dyn_ref::<HtmlElement>().unwrap().style();
    assert!(style.get_property_value("animation").unwrap().contains("fillBar"));
}

#[wasm_bindgen_test]
fn resize_matches_window_size() {
    let page = mount(r#"<canvas id="bg-canvas"></canvas>"#);
    let canvas: HtmlCanvasElement = el(&page, "#bg-canvas").unchecked_into();
    let mut surface = CanvasSurface::new(canvas.clone(), Viewport::new(10.0, 10.0, 1.0)).unwrap();

    let (w, h) = page.viewport();
    surface.set_size(Viewport::new(w, h, page.pixel_ratio()));

    assert_eq!(surface.viewport().css_width, w);
    assert_eq!(surface.viewport().css_height, h);
    assert_eq!(canvas.style().get_property_value("width").unwrap(), format!("{w}px"));
    assert_eq!(canvas.style().get_property_value("height").unwrap(), format!("{h}px"));
}

#[wasm_bindgen_test]
async fn render_loop_stops_on_request() {
    let window = page().window;
    let frames = Rc::new(Cell::new(0u32));
    let counter = frames.clone();
    let render_loop = RenderLoop::start(&window, move || counter.set(counter.get() + 1)).unwrap();

    next_frame(&window).await;
    next_frame(&window).await;
    assert!(render_loop.is_running());
    assert!(frames.get() > 0);

    render_loop.stop();
    assert!(!render_loop.is_running());
    let seen = frames.get();
    next_frame(&window).await;
    next_frame(&window).await;
    assert_eq!(frames.get(), seen);
}

#[wasm_bindgen_test]
fn scroll_handlers_style_navbar_and_hero() {
    let page = mount(
        r#"<nav class="navbar"></nav>
           <div class="hero-content"></div>
           <div style="height:5000px"></div>"#,
    );
    let last_scroll = Rc::new(Cell::new(-1.0));
    let _listeners = dom::wire_scroll(&page, &quiet_config(), last_scroll.clone()).unwrap();
    let navbar = el(&page, ".navbar");
    let hero = el(&page, ".hero-content");

    scroll_window(&page, 300.0);
    let offset = page.scroll_offset();
    assert!(offset > 100.0);
    assert_eq!(last_scroll.get(), offset);
    assert!(has_class(&navbar, "scrolled"));

    let (_, vh) = page.viewport();
    let expected = parallax(offset, vh).unwrap();
    assert_eq!(style_of(&hero, "transform"), expected.transform());
    let opacity: f64 = style_of(&hero, "opacity").parse().unwrap();
    assert!((opacity - expected.opacity).abs() < 1e-3);

    scroll_window(&page, 0.0);
    assert_eq!(last_scroll.get(), 0.0);
    assert!(!has_class(&navbar, "scrolled"));
    assert_eq!(style_of(&hero, "opacity"), "1");
}

#[wasm_bindgen_test]
fn watcher_tracks_every_match() {
    let page = mount(r#"<div data-aos="a"></div><div data-aos="b"></div><div></div>"#);
    let watcher = RevealWatcher::watch_all(&page, "[data-aos]", RevealOptions::reveal()).unwrap();
    assert_eq!(watcher.tracked(), 2);
}

#[wasm_bindgen_test]
fn mount_without_canvas_is_fatal() {
    let page = mount(r#"<nav class="navbar"></nav>"#);
    let app = App::new(page, quiet_config());
    match app.mount() {
        Err(SiteError::MissingMount(id)) => assert_eq!(id, "#bg-canvas"),
        other => panic!("expected missing mount, got {other:?}"),
    }
    assert!(!app.is_rendering());
}

#[wasm_bindgen_test]
fn boot_without_canvas_keeps_page_effects() {
    app::shutdown();
    let page = mount(
        r#"<nav class="navbar"><button class="menu-toggle"></button><ul class="nav-menu"></ul></nav>
           <div style="height:5000px"></div>"#,
    );

    let booted = app::boot(quiet_config(), Rc::new(Recorder::default()));
    if page.document.ready_state() == "complete" {
        assert!(matches!(&booted, Err(SiteError::MissingMount(id)) if id == "#bg-canvas"));
    } else {
        assert!(booted.is_ok());
    }

    let running = app::running().expect("page effects stay wired");
    assert!(!running.is_rendering());

    click(&el(&page, ".menu-toggle"));
    assert!(has_class(&el(&page, ".nav-menu"), "active"));

    let init = MouseEventInit::new();
    init.set_client_x(0);
    init.set_client_y(0);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    page.document.dispatch_event(&event).unwrap();
    let (w, h) = page.viewport();
    assert_eq!(running.state().borrow().mouse, normalize_pointer(0.0, 0.0, w, h));

    scroll_window(&page, 200.0);
    assert!(running.last_scroll() > 0.0);
    assert_eq!(running.last_scroll(), page.scroll_offset());
    scroll_window(&page, 0.0);

    app::shutdown();
    assert!(app::running().is_none());
}

#[wasm_bindgen_test]
fn second_boot_returns_running_instance() {
    app::shutdown();
    mount(r#"<canvas id="bg-canvas"></canvas>"#);

    let first = app::boot(quiet_config(), Rc::new(Recorder::default())).unwrap();
    let second = app::boot(quiet_config(), Rc::new(Recorder::default())).unwrap();
    assert!(Rc::ptr_eq(&first, &second));

    app::shutdown();
    assert!(!first.is_rendering());
}
