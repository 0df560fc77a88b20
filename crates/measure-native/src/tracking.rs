// Synthetic tracking provider: a seeded feature-point cloud in front of a
// fixed perspective camera. A tap resolves by casting the screen point into
// world space and ray-sphere-testing every feature; the nearest hit wins,
// standing in for a real hit-test against tracked feature points.
// Kept free of crate-local imports so host tests can include it directly.

use glam::{Mat4, Vec2, Vec3, Vec4};
use measure_core::TrackingProvider;
use rand::prelude::*;

fn view_proj(width: f32, height: f32, camera_z: f32) -> Mat4 {
    let aspect = width / height.max(1.0);
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect, 0.1, 100.0);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, camera_z), Vec3::ZERO, Vec3::Y);
    proj * view
}

/// Compute a world-space ray from viewport pixel coordinates.
///
/// Returns `(ray_origin, ray_direction)` for a camera at `(0, 0, camera_z)`
/// looking at the origin.
#[inline]
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    camera_z: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height);
    let inv = view_proj(width, height, camera_z).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = Vec3::new(0.0, 0.0, camera_z);
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Project a world point to viewport pixels; `None` when behind the camera.
/// The demo script uses this to aim taps exactly at known features.
#[inline]
pub fn world_to_screen(width: f32, height: f32, point: Vec3, camera_z: f32) -> Option<Vec2> {
    let clip = view_proj(width, height, camera_z) * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}

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

pub struct FeatureCloud {
    points: Vec<Vec3>,
    width: f32,
    height: f32,
    camera_z: f32,
    hit_radius: f32,
}

impl FeatureCloud {
    /// Scatter `count` features in a box around the origin, 1.5 to 3 meters
    /// in front of the camera. Seeded so runs are reproducible.
    pub fn new(
        seed: u64,
        count: usize,
        width: f32,
        height: f32,
        camera_z: f32,
        hit_radius: f32,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-0.5..0.5),
                    rng.gen_range(-0.35..0.35),
                    rng.gen_range(-1.0..0.0),
                )
            })
            .collect();
        Self::from_points(points, width, height, camera_z, hit_radius)
    }

    pub fn from_points(
        points: Vec<Vec3>,
        width: f32,
        height: f32,
        camera_z: f32,
        hit_radius: f32,
    ) -> Self {
        Self {
            points,
            width,
            height,
            camera_z,
            hit_radius,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Viewport position of a feature, for aiming scripted taps.
    pub fn screen_position_of(&self, point: Vec3) -> Option<Vec2> {
        world_to_screen(self.width, self.height, point, self.camera_z)
    }
}

/// Default tap script: aim at up to three known features (two to measure,
/// one to trigger the clearing tap), with a screen-corner miss slotted in
/// once a pair is on the way.
pub fn demo_taps(cloud: &FeatureCloud) -> Vec<Vec2> {
    let mut taps = Vec::new();
    for &p in cloud.points().iter().take(3) {
        if let Some(screen) = cloud.screen_position_of(p) {
            taps.push(screen);
        }
    }
    taps.insert(taps.len().min(2), Vec2::new(2.0, 2.0));
    taps
}

impl TrackingProvider for FeatureCloud {
    fn resolve_world_point(&self, screen: Vec2) -> Option<Vec3> {
        let (ro, rd) = screen_to_world_ray(self.width, self.height, screen.x, screen.y, self.camera_z);
        let mut best: Option<(f32, Vec3)> = None;
        for &p in &self.points {
            if let Some(t) = ray_sphere(ro, rd, p, self.hit_radius) {
                match best {
                    Some((bt, _)) if t >= bt => {}
                    _ => best = Some((t, p)),
                }
            }
        }
        best.map(|(_, p)| p)
    }
}
