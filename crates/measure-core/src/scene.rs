//! Collaborator contracts for the interaction core.
//!
//! The core never talks to a tracking session or a scene graph directly; it
//! only issues the calls below. Frontends implement both traits against the
//! real platform (an AR hit-test API and a 3D scene graph) or against fakes
//! in tests. All renderer calls are fire-and-forget: the core does not wait
//! for, or react to, render confirmation.

use glam::{Vec2, Vec3};

/// Opaque handle to a marker visual owned by the renderer.
///
/// The core stores handles so it can request removal later, but never
/// interprets them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// Opaque handle to the floating measurement label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LabelHandle(pub u64);

/// Resolves a 2D screen point to a 3D world-space point.
///
/// Returns `None` when no trackable surface or feature point lies under the
/// screen location; that is an expected outcome, not an error. A `Some`
/// result is a best-effort current-frame estimate in meters, in the
/// provider's stabilized coordinate frame.
pub trait TrackingProvider {
    fn resolve_world_point(&self, screen: Vec2) -> Option<Vec3>;
}

/// Adds and removes the visuals the core owns references to: up to two
/// marker spheres and at most one text label.
pub trait SceneRenderer {
    fn add_marker(&mut self, position: Vec3) -> NodeHandle;
    fn remove_marker(&mut self, node: NodeHandle);
    fn add_label(&mut self, text: &str, position: Vec3) -> LabelHandle;
    fn remove_label(&mut self, label: LabelHandle);
}
