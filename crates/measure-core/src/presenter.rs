//! Measurement presentation: distance math and the label lifecycle.
//!
//! The presenter is the exclusive owner of the single floating label. Every
//! update is release-then-acquire: the previous label is removed from the
//! scene before its replacement is created, so at most one label exists at
//! any time and none is ever orphaned.

use glam::Vec3;

use crate::constants::{LABEL_Y_OFFSET_M, METERS_TO_DISPLAY};
use crate::markers::MarkerStore;
use crate::scene::{LabelHandle, SceneRenderer};

/// Euclidean distance between two world points, in meters.
#[inline]
pub fn distance_meters(start: Vec3, end: Vec3) -> f32 {
    (end - start).length()
}

/// Convert a metric distance to the display unit. The absolute value is
/// taken because sign carries no meaning for a distance.
#[inline]
pub fn display_units(meters: f32) -> f32 {
    meters.abs() * METERS_TO_DISPLAY
}

/// Format a display-unit value with a fixed two-decimal precision. The
/// original showed the raw float-to-string output; a fixed precision keeps
/// the label stable as tracking refines the endpoints.
#[inline]
pub fn format_distance(display: f32) -> String {
    format!("{display:.2}")
}

#[derive(Debug, Default)]
pub struct MeasurementPresenter {
    label: Option<LabelHandle>,
}

impl MeasurementPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    /// Bring the label in line with the store: a complete pair gets a fresh
    /// label at the end marker (lifted slightly so it clears the marker
    /// sphere), an empty store gets none, and a lone start marker changes
    /// nothing since a single point has no measurement.
    pub fn sync<R: SceneRenderer>(&mut self, store: &MarkerStore, renderer: &mut R) {
        if let Some((start, end)) = store.current_pair() {
            let text = format_distance(display_units(distance_meters(start, end)));
            if let Some(old) = self.label.take() {
                renderer.remove_label(old);
            }
            let at = end + Vec3::Y * LABEL_Y_OFFSET_M;
            self.label = Some(renderer.add_label(&text, at));
            log::info!("[label] showing {text}");
        } else if store.is_empty() {
            self.clear(renderer);
        }
    }

    /// Release the label if one is attached.
    pub fn clear<R: SceneRenderer>(&mut self, renderer: &mut R) {
        if let Some(old) = self.label.take() {
            renderer.remove_label(old);
            log::debug!("[label] cleared");
        }
    }
}
