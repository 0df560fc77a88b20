// Tuning constants for the synthetic tracking setup.

// Viewport
pub const VIEW_WIDTH: f32 = 1280.0;
pub const VIEW_HEIGHT: f32 = 800.0;
pub const CAMERA_Z: f32 = 2.0; // camera eye on +Z looking at the origin

// Feature cloud
pub const FEATURE_COUNT: usize = 64;
pub const FEATURE_SEED: u64 = 7;
pub const FEATURE_HIT_RADIUS: f32 = 0.03; // ray-sphere radius per feature, meters
