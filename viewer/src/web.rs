//! Browser backend: a [`Surface`] over `CanvasRenderingContext2d`, and
//! image decoding through `createImageBitmap`.
//!
//! Every fallible web-sys call is mapped into [`SurfaceError`] or
//! [`ViewerError::DecodeFailure`]; `JsValue` never leaks past this module.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, CanvasRenderingContext2d, File, HtmlCanvasElement, ImageBitmap};

use crate::error::{SurfaceError, ViewerError};
use crate::geometry::{Point, ScreenRect, Size};
use crate::image::SourceImage;
use crate::surface::{LineStyle, Surface};

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn call_err(call: &'static str) -> impl FnOnce(JsValue) -> SurfaceError {
    move |err| SurfaceError::Call { call, reason: js_reason(&err) }
}

/// Canvas element plus its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Context`] if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| SurfaceError::Context(js_reason(&err)))?
            .ok_or_else(|| SurfaceError::Context("getContext(\"2d\") returned null".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Context("context is not a CanvasRenderingContext2d".into()))?;
        Ok(Self { canvas, ctx })
    }

    /// The canvas's bounding rectangle in client coordinates.
    #[must_use]
    pub fn screen_rect(&self) -> ScreenRect {
        let rect = self.canvas.get_bounding_client_rect();
        ScreenRect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Whole canvas pixels covering `extent`. Rounds up so nothing is clipped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_extent(extent: f64) -> u32 {
    if extent.is_finite() && extent > 0.0 { extent.ceil().min(f64::from(u32::MAX)) as u32 } else { 0 }
}

impl Surface for CanvasSurface {
    type Image = ImageBitmap;

    fn resize(&mut self, size: Size) -> Result<(), SurfaceError> {
        self.canvas.set_width(pixel_extent(size.width));
        self.canvas.set_height(pixel_extent(size.height));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        let w = f64::from(self.canvas.width());
        let h = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, w, h);
        Ok(())
    }

    fn push_transform(&mut self) {
        self.ctx.save();
    }

    fn pop_transform(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), SurfaceError> {
        self.ctx.translate(x, y).map_err(call_err("translate"))
    }

    fn rotate(&mut self, angle: f64) -> Result<(), SurfaceError> {
        self.ctx.rotate(angle).map_err(call_err("rotate"))
    }

    fn scale(&mut self, sx: f64, sy: f64) -> Result<(), SurfaceError> {
        self.ctx.scale(sx, sy).map_err(call_err("scale"))
    }

    fn shear(&mut self, shear_x: f64, shear_y: f64) -> Result<(), SurfaceError> {
        self.ctx
            .transform(1.0, shear_y, shear_x, 1.0, 0.0, 0.0)
            .map_err(call_err("transform"))
    }

    fn draw_image(&mut self, image: &ImageBitmap, at: Point, size: Option<Size>) -> Result<(), SurfaceError> {
        let drawn = match size {
            Some(size) => self
                .ctx
                .draw_image_with_image_bitmap_and_dw_and_dh(image, at.x, at.y, size.width, size.height),
            None => self.ctx.draw_image_with_image_bitmap(image, at.x, at.y),
        };
        drawn.map_err(call_err("drawImage"))
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &LineStyle) -> Result<(), SurfaceError> {
        self.ctx.set_stroke_style_str(&style.color);
        self.ctx.set_line_width(style.width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }
}

/// Decode an uploaded file into a drawable bitmap.
///
/// This is the one suspension point of the viewer. Callers must hold a
/// [`crate::image::LoadTicket`] across the await and hand it back with the
/// result.
///
/// # Errors
///
/// Returns [`ViewerError::DecodeFailure`] if there is no window, the file is
/// not an image the browser can decode, or the promise resolves to something
/// other than an `ImageBitmap`.
pub async fn decode_file(file: &File) -> Result<SourceImage<ImageBitmap>, ViewerError> {
    let window = web_sys::window().ok_or_else(|| ViewerError::DecodeFailure("no window".into()))?;
    let blob: &Blob = file.as_ref();
    let promise = window
        .create_image_bitmap_with_blob(blob)
        .map_err(|err| ViewerError::DecodeFailure(js_reason(&err)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|err| ViewerError::DecodeFailure(js_reason(&err)))?;
    let bitmap = value
        .dyn_into::<ImageBitmap>()
        .map_err(|_| ViewerError::DecodeFailure("decoder returned a non-bitmap value".into()))?;
    Ok(SourceImage::new(f64::from(bitmap.width()), f64::from(bitmap.height()), bitmap))
}
