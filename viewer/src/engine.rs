use tracing::{debug, info, trace, warn};
use web_sys::{HtmlCanvasElement, ImageBitmap};

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::geometry::{Point, ScreenRect, Size};
use crate::gesture::drag_step;
use crate::image::{LoadTicket, SourceImage};
use crate::input::{InputState, Press, WheelDelta};
use crate::render;
use crate::skew::{SkewLayout, SkewState};
use crate::surface::Surface;
use crate::viewport::ViewportState;
use crate::web::CanvasSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Status line text shown after a successful load.
pub const MSG_LOADED: &str = "Image loaded. Drag to manipulate the image.";
/// Status line text when the file selection is emptied.
pub const MSG_SELECT_IMAGE: &str = "Please select an image first.";

/// Severity of a status message; maps to the status element's CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// User-visible status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The drawing surface must be resized before the next render.
    Resize(Size),
    /// State changed; the scene should be redrawn.
    RenderNeeded,
    /// Show this status to the user.
    Status(Status),
}

/// Which transform pipeline is currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Drag / rotate / zoom with [`ViewportState`].
    #[default]
    Viewport,
    /// Static skew with [`SkewState`], drawn on explicit apply.
    Tilt,
}

/// Core engine state: the session, with no browser dependencies.
///
/// Generic over the image handle so tests can drive it with plain values.
/// Separated from [`Engine`] so it can be tested without WASM.
#[derive(Debug)]
pub struct EngineCore<H> {
    pub config: ViewerConfig,
    pub image: Option<SourceImage<H>>,
    pub viewport: ViewportState,
    pub skew: SkewState,
    pub input: InputState,
    pub mode: Mode,
    pub guides: bool,
    /// Current drawing-surface size in whole pixels; its center is the
    /// render pivot and matches the center of the resized canvas.
    pub surface_size: Size,
    pub tilt_layout: Option<SkewLayout>,
    generation: u64,
}

impl<H> Default for EngineCore<H> {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl<H> EngineCore<H> {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            guides: config.guides,
            config,
            image: None,
            viewport: ViewportState::default(),
            skew: SkewState::default(),
            input: InputState::default(),
            mode: Mode::default(),
            surface_size: Size::default(),
            tilt_layout: None,
            generation: 0,
        }
    }

    // --- Loading ---

    /// Start a new upload. Any decode still in flight is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        debug!(generation = self.generation, "image load started");
        LoadTicket(self.generation)
    }

    /// Install a decoded image.
    ///
    /// Resets the viewport to identity, ends any drag, returns to viewport
    /// mode and sizes the surface for the new image.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::StaleLoad`] if a newer upload has started since
    /// `ticket` was issued. State is untouched in that case.
    pub fn finish_load(&mut self, ticket: LoadTicket, image: SourceImage<H>) -> Result<Vec<Action>, ViewerError> {
        self.check_ticket(ticket)?;

        let bounds = self.config.sizing.compute_bounds(image.size()).whole_pixels();
        info!(
            width = image.width,
            height = image.height,
            surface_w = bounds.width,
            surface_h = bounds.height,
            "image loaded"
        );

        self.image = Some(image);
        self.viewport.reset();
        self.input = InputState::Idle;
        self.mode = Mode::Viewport;
        self.tilt_layout = None;
        self.surface_size = bounds;

        Ok(vec![
            Action::Resize(bounds),
            Action::RenderNeeded,
            Action::Status(Status::new(StatusKind::Success, MSG_LOADED)),
        ])
    }

    /// Report a failed decode for `ticket`.
    ///
    /// State is left exactly as it was. Failures of superseded uploads are
    /// dropped silently.
    pub fn fail_load(&mut self, ticket: LoadTicket, reason: &str) -> Vec<Action> {
        if let Err(err) = self.check_ticket(ticket) {
            debug!(code = err.error_code(), %err, "ignoring failure of superseded load");
            return Vec::new();
        }
        let err = ViewerError::DecodeFailure(reason.to_owned());
        warn!(code = err.error_code(), %err, "image load failed");
        vec![Action::Status(Status::new(StatusKind::Error, err.to_string()))]
    }

    /// The file selection was emptied: drop the image and ask for a new one.
    pub fn clear_image(&mut self) -> Vec<Action> {
        // Invalidate any decode still in flight for the previous selection.
        self.generation += 1;
        self.image = None;
        self.input = InputState::Idle;
        self.tilt_layout = None;
        vec![Action::Status(Status::new(StatusKind::Info, MSG_SELECT_IMAGE))]
    }

    fn check_ticket(&self, ticket: LoadTicket) -> Result<(), ViewerError> {
        if ticket.0 == self.generation {
            Ok(())
        } else {
            Err(ViewerError::StaleLoad { ticket: ticket.0, current: self.generation })
        }
    }

    // --- Viewport gestures ---

    /// Press: start a drag if exactly one contact is down.
    pub fn on_pointer_down(&mut self, press: Press) -> Vec<Action> {
        if !self.accepts_gestures() {
            return Vec::new();
        }
        if !press.starts_drag() {
            debug!(contacts = press.contacts, "multi-contact press ignored");
            return Vec::new();
        }
        self.input = InputState::Dragging { last_screen: press.pos };
        Vec::new()
    }

    /// Move: rotate or pan depending on the distance from the surface center.
    ///
    /// `rect` is the surface's current on-screen bounding rectangle.
    pub fn on_pointer_move(&mut self, pos: Point, rect: ScreenRect) -> Vec<Action> {
        if !self.accepts_gestures() {
            return Vec::new();
        }
        let InputState::Dragging { last_screen } = self.input else {
            return Vec::new();
        };

        let step = drag_step(last_screen, pos, rect.center(), &self.config.gesture);
        trace!(?step, "drag step");
        self.viewport = step.apply(self.viewport);
        self.input = InputState::Dragging { last_screen: pos };
        vec![Action::RenderNeeded]
    }

    /// Release: always ends the drag, wherever it happens.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        Vec::new()
    }

    /// One wheel tick: multiplicative zoom step, clamped.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        if !self.accepts_gestures() {
            return Vec::new();
        }
        self.viewport.zoom_step(delta.dy, &self.config.zoom);
        vec![Action::RenderNeeded]
    }

    fn accepts_gestures(&self) -> bool {
        self.image.is_some() && self.mode == Mode::Viewport
    }

    // --- Guides ---

    /// Toggle the crosshair guide.
    pub fn set_guides(&mut self, enabled: bool) -> Vec<Action> {
        self.guides = enabled;
        if self.image.is_some() && self.mode == Mode::Viewport {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Tilt ---

    /// Slider input for the horizontal skew. Takes effect on the next apply.
    pub fn set_skew_x(&mut self, value: f64) {
        self.skew.set_x(value);
    }

    /// Slider input for the vertical skew. Takes effect on the next apply.
    pub fn set_skew_y(&mut self, value: f64) {
        self.skew.set_y(value);
    }

    /// Apply the current skew: switch to tilt mode, size and redraw.
    ///
    /// Re-applying with unchanged sliders yields identical actions.
    pub fn apply_tilt(&mut self) -> Vec<Action> {
        let image = match self.require_image() {
            Ok(image) => image,
            Err(err) => {
                debug!(code = err.error_code(), "tilt apply ignored");
                return Vec::new();
            }
        };
        let layout = self.skew.layout(image.size());
        info!(
            skew_x = layout.skew.skew_x,
            skew_y = layout.skew.skew_y,
            surface_w = layout.surface.width,
            surface_h = layout.surface.height,
            "tilt applied"
        );
        self.mode = Mode::Tilt;
        self.input = InputState::Idle;
        self.tilt_layout = Some(layout);
        self.surface_size = layout.surface.whole_pixels();
        vec![Action::Resize(self.surface_size), Action::RenderNeeded]
    }

    /// Return to viewport mode, keeping the viewport transform.
    pub fn show_viewport(&mut self) -> Vec<Action> {
        let image = match self.require_image() {
            Ok(image) => image,
            Err(err) => {
                debug!(code = err.error_code(), "viewport switch ignored");
                return Vec::new();
            }
        };
        let bounds = self.config.sizing.compute_bounds(image.size()).whole_pixels();
        debug!("switched to viewport mode");
        self.mode = Mode::Viewport;
        self.tilt_layout = None;
        self.surface_size = bounds;
        vec![Action::Resize(bounds), Action::RenderNeeded]
    }

    fn require_image(&self) -> Result<&SourceImage<H>, ViewerError> {
        self.image.as_ref().ok_or(ViewerError::NoImageLoaded)
    }

    // --- Render ---

    /// Draw the active mode. Does nothing while no image is loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Surface`] if a drawing call fails.
    pub fn render<S>(&self, surface: &mut S) -> Result<(), ViewerError>
    where
        S: Surface<Image = H>,
    {
        let Some(image) = &self.image else {
            return Ok(());
        };
        match (self.mode, &self.tilt_layout) {
            (Mode::Tilt, Some(layout)) => render::draw_tilt(surface, image, layout)?,
            _ => {
                let guide = self.guides.then_some(&self.config.guide);
                render::draw_viewport(
                    surface,
                    image,
                    &self.viewport,
                    self.surface_size,
                    &self.config.sizing,
                    guide,
                )?;
            }
        }
        Ok(())
    }

    // --- Queries ---

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn skew(&self) -> SkewState {
        self.skew
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    #[must_use]
    pub fn tilt_layout(&self) -> Option<SkewLayout> {
        self.tilt_layout
    }
}

/// The full engine. Wraps [`EngineCore`] and owns the browser canvas.
///
/// [`Action::Resize`] is executed on the canvas here before being handed back
/// with the other actions, so the host only has to size its container.
pub struct Engine {
    surface: CanvasSurface,
    pub core: EngineCore<ImageBitmap>,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Surface`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: ViewerConfig) -> Result<Self, ViewerError> {
        let surface = CanvasSurface::new(canvas)?;
        Ok(Self { surface, core: EngineCore::new(config) })
    }

    /// Carry out resizes, pass everything else through.
    fn run(&mut self, actions: Vec<Action>) -> Result<Vec<Action>, ViewerError> {
        let mut rest = Vec::with_capacity(actions.len());
        for action in actions {
            match action {
                Action::Resize(size) => {
                    self.surface.resize(size)?;
                    rest.push(Action::Resize(size));
                }
                other => rest.push(other),
            }
        }
        Ok(rest)
    }

    // --- Delegated loading ---

    pub fn begin_load(&mut self) -> LoadTicket {
        self.core.begin_load()
    }

    /// # Errors
    ///
    /// Returns [`ViewerError::StaleLoad`] for superseded tickets and
    /// [`ViewerError::Surface`] if the canvas cannot be resized.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        image: SourceImage<ImageBitmap>,
    ) -> Result<Vec<Action>, ViewerError> {
        let actions = self.core.finish_load(ticket, image)?;
        self.run(actions)
    }

    pub fn fail_load(&mut self, ticket: LoadTicket, reason: &str) -> Vec<Action> {
        self.core.fail_load(ticket, reason)
    }

    pub fn clear_image(&mut self) -> Vec<Action> {
        self.core.clear_image()
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, press: Press) -> Vec<Action> {
        self.core.on_pointer_down(press)
    }

    /// Move, measured against the canvas's live bounding rectangle.
    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<Action> {
        let rect = self.surface.screen_rect();
        self.core.on_pointer_move(pos, rect)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(delta)
    }

    pub fn set_guides(&mut self, enabled: bool) -> Vec<Action> {
        self.core.set_guides(enabled)
    }

    pub fn set_skew_x(&mut self, value: f64) {
        self.core.set_skew_x(value);
    }

    pub fn set_skew_y(&mut self, value: f64) {
        self.core.set_skew_y(value);
    }

    /// # Errors
    ///
    /// Returns [`ViewerError::Surface`] if the canvas cannot be resized.
    pub fn apply_tilt(&mut self) -> Result<Vec<Action>, ViewerError> {
        let actions = self.core.apply_tilt();
        self.run(actions)
    }

    /// # Errors
    ///
    /// Returns [`ViewerError::Surface`] if the canvas cannot be resized.
    pub fn show_viewport(&mut self) -> Result<Vec<Action>, ViewerError> {
        let actions = self.core.show_viewport();
        self.run(actions)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Surface`] if a canvas call fails.
    pub fn render(&mut self) -> Result<(), ViewerError> {
        self.core.render(&mut self.surface)
    }
}
