// Shared measurement/label tuning constants used by the core and frontends.

// Label placement
pub const LABEL_Y_OFFSET_M: f32 = 0.01; // lift above the end-marker sphere

// Unit conversion: meters -> historical display unit. The composed factor
// (x100 to centimeters, x0.39 toward inches) is kept as the literal the
// app has always shipped with; the exact cm->inch factor would be 0.3937.
pub const METERS_TO_DISPLAY: f32 = 100.0 * 0.39;
