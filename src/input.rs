use crate::core::{PhotoData, PointerSample};
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;
use web_sys as web;

/// Contact points of a touch event, in canvas pixels.
pub type TouchPoints = SmallVec<[Vec2; 4]>;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the nearest photo hit by the ray, with photo positions taken
/// through the tree's current model transform.
pub fn pick_photo(
    ray_origin: Vec3,
    ray_dir: Vec3,
    model: Mat4,
    photos: &[PhotoData],
    radius: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, p) in photos.iter().enumerate() {
        let center = model.transform_point3(p.position);
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_to_canvas_px(
    client_x: f32,
    client_y: f32,
    canvas: &web::HtmlCanvasElement,
) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(
        (x_css / w) * canvas.width() as f32,
        (y_css / h) * canvas.height() as f32,
    )
}

/// Pointer event as a gesture sample. Positions stay in CSS pixels so the
/// tap and sensitivity thresholds do not depend on device pixel ratio.
#[inline]
pub fn pointer_sample(ev: &web::PointerEvent) -> PointerSample {
    PointerSample {
        position: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        time_ms: ev.time_stamp(),
        is_primary: ev.is_primary(),
    }
}

/// Current contacts of a touch event, in CSS pixels. Missing items are skipped.
pub fn touch_points(ev: &web::TouchEvent) -> TouchPoints {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}
