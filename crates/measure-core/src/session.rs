//! Session façade wiring taps to the store and the presenter.
//!
//! One instance per tracking run. All calls execute synchronously on the
//! caller's thread; taps are applied strictly in arrival order, so each
//! transition (including a reset) is fully settled before the next tap is
//! considered.

use glam::{Vec2, Vec3};

use crate::markers::{MarkerStore, TapResult};
use crate::presenter::MeasurementPresenter;
use crate::scene::{SceneRenderer, TrackingProvider};

pub struct MeasureSession<T: TrackingProvider, R: SceneRenderer> {
    tracking: T,
    renderer: R,
    store: MarkerStore,
    presenter: MeasurementPresenter,
}

impl<T: TrackingProvider, R: SceneRenderer> MeasureSession<T, R> {
    pub fn new(tracking: T, renderer: R) -> Self {
        Self {
            tracking,
            renderer,
            store: MarkerStore::new(),
            presenter: MeasurementPresenter::new(),
        }
    }

    /// Handle one screen tap end to end: resolve it against the tracking
    /// provider, transition the store, then bring the label in line with
    /// the new state. A `NoHit` skips the label sync since nothing changed.
    pub fn on_screen_tap(&mut self, screen: Vec2) -> TapResult {
        let result = self
            .store
            .handle_tap(screen, &self.tracking, &mut self.renderer);
        if result != TapResult::NoHit {
            self.presenter.sync(&self.store, &mut self.renderer);
        }
        log::debug!("[session] tap -> {result:?}, markers={}", self.store.len());
        result
    }

    /// Drop all markers and the label. Called when a tracking run starts
    /// (or restarts) so every run begins from an empty scene.
    pub fn begin_session(&mut self) {
        self.presenter.clear(&mut self.renderer);
        self.store.clear(&mut self.renderer);
        log::info!("[session] reset to empty");
    }

    pub fn marker_count(&self) -> usize {
        self.store.len()
    }

    pub fn current_pair(&self) -> Option<(Vec3, Vec3)> {
        self.store.current_pair()
    }

    pub fn has_label(&self) -> bool {
        self.presenter.has_label()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tear down the session, handing back both collaborators (the shell
    /// audits the renderer's node ledger after a run).
    pub fn into_parts(self) -> (T, R) {
        (self.tracking, self.renderer)
    }
}
