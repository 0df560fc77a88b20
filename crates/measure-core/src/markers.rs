//! Marker placement state machine.
//!
//! The store holds zero, one or two placed markers and decides, per resolved
//! tap, whether to append a marker or clear the pair. The three states are an
//! explicit enum so the capacity bound holds by construction and the
//! reset-on-third-tap rule is a named transition rather than a side effect of
//! collection length.

use glam::{Vec2, Vec3};

use crate::scene::{NodeHandle, SceneRenderer, TrackingProvider};

/// A placed measurement endpoint: its resolved world position plus the
/// handle of its sphere visual (owned by the renderer, referenced here).
#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub position: Vec3,
    pub node: NodeHandle,
}

/// Placement states. Order within `PairComplete` is placement order: the
/// first field is the start marker, the second the end marker.
#[derive(Clone, Copy, Debug, Default)]
pub enum MarkerState {
    #[default]
    Empty,
    OnePlaced(Marker),
    PairComplete(Marker, Marker),
}

/// Outcome of one tap, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// The tap did not resolve to a world point; nothing changed.
    NoHit,
    /// A marker was appended; carries the new marker count (1 or 2).
    MarkerAdded(usize),
    /// A third resolved tap cleared the pair. The clearing tap itself
    /// places no marker.
    Reset,
}

#[derive(Debug, Default)]
pub struct MarkerStore {
    state: MarkerState,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MarkerState {
        &self.state
    }

    pub fn len(&self) -> usize {
        match self.state {
            MarkerState::Empty => 0,
            MarkerState::OnePlaced(_) => 1,
            MarkerState::PairComplete(_, _) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, MarkerState::Empty)
    }

    /// `Some((start, end))` only while the pair is complete.
    pub fn current_pair(&self) -> Option<(Vec3, Vec3)> {
        match self.state {
            MarkerState::PairComplete(start, end) => Some((start.position, end.position)),
            _ => None,
        }
    }

    /// Apply one tap. Resolution failure leaves the store untouched; a
    /// resolved tap while the pair is complete clears atomically (the store
    /// is empty before the next tap is considered, and this tap appends
    /// nothing); otherwise the resolved point becomes the next marker and
    /// its visual is requested from the renderer.
    pub fn handle_tap<T: TrackingProvider, R: SceneRenderer>(
        &mut self,
        screen: Vec2,
        tracking: &T,
        renderer: &mut R,
    ) -> TapResult {
        let Some(world) = tracking.resolve_world_point(screen) else {
            log::debug!("[markers] tap ({:.0},{:.0}) resolved nothing", screen.x, screen.y);
            return TapResult::NoHit;
        };
        match self.state {
            MarkerState::PairComplete(_, _) => {
                self.clear(renderer);
                log::info!("[markers] third tap, pair cleared");
                TapResult::Reset
            }
            MarkerState::Empty => {
                let node = renderer.add_marker(world);
                self.state = MarkerState::OnePlaced(Marker {
                    position: world,
                    node,
                });
                log::debug!(
                    "[markers] start placed at ({:.3},{:.3},{:.3})",
                    world.x,
                    world.y,
                    world.z
                );
                TapResult::MarkerAdded(1)
            }
            MarkerState::OnePlaced(start) => {
                let node = renderer.add_marker(world);
                self.state = MarkerState::PairComplete(
                    start,
                    Marker {
                        position: world,
                        node,
                    },
                );
                log::debug!(
                    "[markers] end placed at ({:.3},{:.3},{:.3})",
                    world.x,
                    world.y,
                    world.z
                );
                TapResult::MarkerAdded(2)
            }
        }
    }

    /// Release every marker visual and return to `Empty`.
    pub fn clear<R: SceneRenderer>(&mut self, renderer: &mut R) {
        match std::mem::take(&mut self.state) {
            MarkerState::Empty => {}
            MarkerState::OnePlaced(m) => renderer.remove_marker(m.node),
            MarkerState::PairComplete(a, b) => {
                renderer.remove_marker(a.node);
                renderer.remove_marker(b.node);
            }
        }
    }
}
