//! Wires page elements and DOM events to the viewer engine.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, info, warn};
use viewer::engine::{Action, Engine, Status, StatusKind};
use viewer::error::ViewerError;
use viewer::geometry::Point;
use viewer::input::Press;
use viewer::web::decode_file;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    MouseEvent, TouchEvent, WheelEvent, Window,
};

use crate::dom;
use crate::error::AppError;

/// The mounted viewer: engine plus the page elements it reports to.
pub struct App {
    engine: RefCell<Engine>,
    upload: HtmlInputElement,
    status: HtmlElement,
    container: Option<HtmlElement>,
}

/// Build the engine on the page's canvas and register every listener.
///
/// # Errors
///
/// Fails if a required element is missing, the `data-config` attribute does
/// not parse, the canvas has no 2D context, or a listener cannot be added.
pub fn mount(window: &Window, document: &Document, canvas: HtmlCanvasElement) -> Result<Rc<App>, AppError> {
    let config = dom::read_config(canvas.get_attribute(dom::CONFIG_ATTR).as_deref())?;
    let upload: HtmlInputElement = dom::required(document, dom::IMAGE_UPLOAD)?;
    let status: HtmlElement = dom::required(document, dom::STATUS_MESSAGE)?;
    let container: Option<HtmlElement> = dom::optional(document, dom::CANVAS_CONTAINER)?;
    let skew_x: Option<HtmlInputElement> = dom::optional(document, dom::SKEW_X)?;
    let skew_y: Option<HtmlInputElement> = dom::optional(document, dom::SKEW_Y)?;
    let apply_tilt: Option<HtmlElement> = dom::optional(document, dom::APPLY_TILT)?;
    let show_viewport: Option<HtmlElement> = dom::optional(document, dom::SHOW_VIEWPORT)?;
    let toggle_guides: Option<HtmlInputElement> = dom::optional(document, dom::TOGGLE_GUIDES)?;

    let mut engine = Engine::new(canvas.clone(), config)?;
    if let Some(toggle) = &toggle_guides {
        toggle.set_checked(engine.core.guides);
    }
    if let Some(slider) = &skew_x {
        engine.set_skew_x(slider.value_as_number());
    }
    if let Some(slider) = &skew_y {
        engine.set_skew_y(slider.value_as_number());
    }

    let app = Rc::new(App { engine: RefCell::new(engine), upload, status, container });

    app.listen_upload()?;
    app.listen_pointer(window, &canvas)?;
    if let Some(slider) = skew_x {
        app.listen_skew(slider, Engine::set_skew_x)?;
    }
    if let Some(slider) = skew_y {
        app.listen_skew(slider, Engine::set_skew_y)?;
    }
    if let Some(button) = apply_tilt {
        app.listen_mode(&button, Engine::apply_tilt)?;
    }
    if let Some(button) = show_viewport {
        app.listen_mode(&button, Engine::show_viewport)?;
    }
    if let Some(toggle) = toggle_guides {
        let handler = Rc::clone(&app);
        let target = toggle.clone();
        listen(&toggle, "change", true, move |_: Event| {
            let actions = handler.engine.borrow_mut().set_guides(target.checked());
            handler.dispatch(actions);
        })?;
    }

    info!("viewer mounted");
    Ok(app)
}

impl App {
    /// Carry out the actions the engine handed back.
    fn dispatch(&self, actions: Vec<Action>) {
        let mut redraw = false;
        for action in actions {
            match action {
                Action::Resize(size) => self.resize_container(&dom::container_height(size)),
                Action::RenderNeeded => redraw = true,
                Action::Status(status) => self.show_status(&status),
            }
        }
        if redraw {
            let result = self.engine.borrow_mut().render();
            if let Err(err) = result {
                self.report(&err);
            }
        }
    }

    fn resize_container(&self, height: &str) {
        let Some(container) = &self.container else {
            return;
        };
        if let Err(err) = container.style().set_property("height", height) {
            warn!(?err, height, "container resize failed");
        }
    }

    fn show_status(&self, status: &Status) {
        self.status.set_text_content(Some(&status.message));
        self.status.set_class_name(dom::status_class(status.kind));
    }

    fn report(&self, err: &ViewerError) {
        error!(code = err.error_code(), %err, "viewer error");
        self.status.set_text_content(Some(&err.to_string()));
        self.status.set_class_name(dom::status_class(StatusKind::Error));
    }

    // --- Listeners ---

    fn listen_upload(self: &Rc<Self>) -> Result<(), AppError> {
        let app = Rc::clone(self);
        listen(&self.upload, "change", true, move |_: Event| app.on_file_change())
    }

    fn on_file_change(self: &Rc<Self>) {
        let Some(file) = self.upload.files().and_then(|files| files.get(0)) else {
            let actions = self.engine.borrow_mut().clear_image();
            self.dispatch(actions);
            return;
        };

        let ticket = self.engine.borrow_mut().begin_load();
        debug!(name = %file.name(), size = file.size(), "decoding upload");
        let app = Rc::clone(self);
        spawn_local(async move {
            let decoded = decode_file(&file).await;
            let actions = match decoded {
                Ok(image) => {
                    let installed = app.engine.borrow_mut().finish_load(ticket, image);
                    match installed {
                        Ok(actions) => actions,
                        Err(err @ ViewerError::StaleLoad { .. }) => {
                            warn!(code = err.error_code(), %err, "decoded image discarded");
                            Vec::new()
                        }
                        Err(err) => {
                            app.report(&err);
                            Vec::new()
                        }
                    }
                }
                Err(ViewerError::DecodeFailure(reason)) => app.engine.borrow_mut().fail_load(ticket, &reason),
                Err(err) => app.engine.borrow_mut().fail_load(ticket, &err.to_string()),
            };
            app.dispatch(actions);
        });
    }

    fn listen_pointer(self: &Rc<Self>, window: &Window, canvas: &HtmlCanvasElement) -> Result<(), AppError> {
        let app = Rc::clone(self);
        listen(canvas, "mousedown", false, move |event: MouseEvent| {
            app.press(&event, Some(Press::single(dom::mouse_point(&event))));
        })?;

        let app = Rc::clone(self);
        listen(canvas, "touchstart", false, move |event: TouchEvent| {
            app.press(&event, dom::touch_start(&event));
        })?;

        let app = Rc::clone(self);
        listen(window, "mousemove", false, move |event: MouseEvent| {
            app.drag(&event, dom::mouse_point(&event));
        })?;

        let app = Rc::clone(self);
        listen(window, "touchmove", false, move |event: TouchEvent| {
            if let Some(pos) = dom::first_touch(&event) {
                app.drag(&event, pos);
            }
        })?;

        for name in ["mouseup", "touchend", "touchcancel"] {
            let app = Rc::clone(self);
            listen(window, name, true, move |_: Event| {
                let actions = app.engine.borrow_mut().on_pointer_up();
                app.dispatch(actions);
            })?;
        }

        let app = Rc::clone(self);
        listen(canvas, "wheel", false, move |event: WheelEvent| {
            if !app.engine.borrow().core.is_loaded() {
                return;
            }
            event.prevent_default();
            let actions = app.engine.borrow_mut().on_wheel(dom::wheel_delta(&event));
            app.dispatch(actions);
        })
    }

    fn press(&self, event: &Event, press: Option<Press>) {
        let Some(press) = press else {
            return;
        };
        if self.engine.borrow().core.is_loaded() {
            event.prevent_default();
        }
        let actions = self.engine.borrow_mut().on_pointer_down(press);
        self.dispatch(actions);
    }

    fn drag(&self, event: &Event, pos: Point) {
        if !self.engine.borrow().core.is_dragging() {
            return;
        }
        event.prevent_default();
        let actions = self.engine.borrow_mut().on_pointer_move(pos);
        self.dispatch(actions);
    }

    fn listen_skew(self: &Rc<Self>, slider: HtmlInputElement, set: fn(&mut Engine, f64)) -> Result<(), AppError> {
        let app = Rc::clone(self);
        let target = slider.clone();
        listen(&slider, "input", true, move |_: Event| {
            set(&mut app.engine.borrow_mut(), target.value_as_number());
        })
    }

    fn listen_mode(
        self: &Rc<Self>,
        button: &HtmlElement,
        switch: fn(&mut Engine) -> Result<Vec<Action>, ViewerError>,
    ) -> Result<(), AppError> {
        let app = Rc::clone(self);
        listen(button, "click", true, move |_: Event| {
            let result = switch(&mut app.engine.borrow_mut());
            match result {
                Ok(actions) => app.dispatch(actions),
                Err(err) => app.report(&err),
            }
        })
    }
}

/// Register `handler` for `event` on `target` for the life of the page.
///
/// `passive: false` lets the handler call `preventDefault` on touch and
/// wheel events, which browsers otherwise treat as passive.
fn listen<E, F>(target: &EventTarget, event: &'static str, passive: bool, mut handler: F) -> Result<(), AppError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |raw: Event| {
        if let Ok(typed) = raw.dyn_into::<E>() {
            handler(typed);
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|err| AppError::Listener { event, reason: format!("{err:?}") })?;
    closure.forget();
    Ok(())
}
