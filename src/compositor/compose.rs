//! The compositing operation itself.

use image::imageops::{resize, FilterType};
use image::RgbaImage;

use super::resize::{Dimensions, ResizePlan};
use super::ComposeError;

/// Composite `overlay` centered on top of `base`.
///
/// Resizes per [`ResizePlan::for_pair`], pastes the overlay centered on
/// a transparent canvas the size of the resized base, then source-over
/// composites that canvas onto the resized base. Inputs are not
/// mutated; the result is a new image with the resized base's
/// dimensions.
///
/// The operation is deterministic: identical inputs produce
/// byte-identical output.
pub fn compose(base: &RgbaImage, overlay: &RgbaImage) -> Result<RgbaImage, ComposeError> {
    let plan = ResizePlan::for_pair(dimensions_of(base), dimensions_of(overlay))?;

    let base = resize_to(base, plan.base);
    let overlay = resize_to(overlay, plan.overlay);

    // Transparent canvas the size of the resized base, overlay centered.
    // The offset goes negative when the overlay is wider than the canvas;
    // floor division keeps it centered and composite_over clips the excess.
    let mut canvas = RgbaImage::new(plan.base.width, plan.base.height);
    let x = (canvas.width() as i64 - overlay.width() as i64).div_euclid(2);
    let y = (canvas.height() as i64 - overlay.height() as i64).div_euclid(2);
    composite_over(&mut canvas, &overlay, x, y);

    // Source-over: canvas (foreground) onto the resized base.
    let mut output = base;
    composite_over(&mut output, &canvas, 0, 0);
    Ok(output)
}

/// Source-over composite `top` onto `bottom` with its top-left corner
/// at (x, y). Pixels falling outside `bottom` are clipped.
fn composite_over(bottom: &mut RgbaImage, top: &RgbaImage, x: i64, y: i64) {
    let (bottom_w, bottom_h) = bottom.dimensions();
    for ty in 0..top.height() {
        let dy = y + ty as i64;
        if dy < 0 || dy >= bottom_h as i64 {
            continue;
        }
        for tx in 0..top.width() {
            let dx = x + tx as i64;
            if dx < 0 || dx >= bottom_w as i64 {
                continue;
            }
            let fg = top.get_pixel(tx, ty).0;
            let bg = bottom.get_pixel_mut(dx as u32, dy as u32);
            bg.0 = blend_over(fg, bg.0);
        }
    }
}

/// Porter-Duff source-over for one RGBA8 pixel.
///
/// `out_a * 255` and the channel numerators are exact in u32; only the
/// final divisions round (to nearest). A fully transparent foreground
/// therefore passes the background through byte for byte, and a fully
/// opaque foreground replaces it.
fn blend_over(fg: [u8; 4], bg: [u8; 4]) -> [u8; 4] {
    let fg_a = fg[3] as u32;
    let bg_weight = bg[3] as u32 * (255 - fg_a);
    let alpha_scaled = fg_a * 255 + bg_weight;
    if alpha_scaled == 0 {
        return [0, 0, 0, 0];
    }
    let mut out = [0u8; 4];
    for i in 0..3 {
        let num = fg[i] as u32 * fg_a * 255 + bg[i] as u32 * bg_weight;
        out[i] = ((num + alpha_scaled / 2) / alpha_scaled) as u8;
    }
    out[3] = ((alpha_scaled + 127) / 255) as u8;
    out
}

fn dimensions_of(img: &RgbaImage) -> Dimensions {
    Dimensions::new(img.width(), img.height())
}

fn resize_to(img: &RgbaImage, target: Dimensions) -> RgbaImage {
    if img.width() == target.width && img.height() == target.height {
        img.clone()
    } else {
        resize(img, target.width, target.height, FilterType::Lanczos3)
    }
}
