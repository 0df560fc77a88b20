// End-to-end tap scenarios through the session façade.

use glam::{Vec2, Vec3};
use measure_core::{
    LabelHandle, MeasureSession, NodeHandle, SceneRenderer, TapResult, TrackingProvider,
};

struct GridTracking;

impl TrackingProvider for GridTracking {
    fn resolve_world_point(&self, screen: Vec2) -> Option<Vec3> {
        (screen.x >= 0.0).then_some(Vec3::new(screen.x, screen.y, 0.0))
    }
}

#[derive(Default)]
struct CountingScene {
    next_id: u64,
    adds: usize,
    removes: usize,
    live: Vec<u64>,
    labels_live: usize,
    last_label_text: Option<String>,
}

impl SceneRenderer for CountingScene {
    fn add_marker(&mut self, _position: Vec3) -> NodeHandle {
        self.next_id += 1;
        self.adds += 1;
        self.live.push(self.next_id);
        NodeHandle(self.next_id)
    }
    fn remove_marker(&mut self, node: NodeHandle) {
        self.removes += 1;
        self.live.retain(|&id| id != node.0);
    }
    fn add_label(&mut self, text: &str, _position: Vec3) -> LabelHandle {
        self.next_id += 1;
        self.adds += 1;
        self.labels_live += 1;
        self.live.push(self.next_id);
        self.last_label_text = Some(text.to_owned());
        LabelHandle(self.next_id)
    }
    fn remove_label(&mut self, label: LabelHandle) {
        self.removes += 1;
        self.labels_live -= 1;
        self.live.retain(|&id| id != label.0);
    }
}

fn make_session() -> MeasureSession<GridTracking, CountingScene> {
    MeasureSession::new(GridTracking, CountingScene::default())
}

#[test]
fn measure_then_reset_scenario() {
    let mut session = make_session();

    assert_eq!(session.on_screen_tap(Vec2::new(0.0, 0.0)), TapResult::MarkerAdded(1));
    assert_eq!(session.marker_count(), 1);
    assert!(!session.has_label());

    assert_eq!(session.on_screen_tap(Vec2::new(0.0, 0.1)), TapResult::MarkerAdded(2));
    assert_eq!(session.marker_count(), 2);
    assert!(session.has_label());
    assert_eq!(session.renderer().last_label_text.as_deref(), Some("3.90"));

    assert_eq!(session.on_screen_tap(Vec2::new(5.0, 5.0)), TapResult::Reset);
    assert_eq!(session.marker_count(), 0);
    assert!(!session.has_label());
    assert_eq!(session.renderer().labels_live, 0);
    assert!(session.renderer().live.is_empty());
}

#[test]
fn miss_is_a_noop_at_every_state() {
    let mut session = make_session();
    let miss = Vec2::new(-1.0, 0.0);

    for _ in 0..3 {
        let markers = session.marker_count();
        let had_label = session.has_label();
        let adds = session.renderer().adds;
        assert_eq!(session.on_screen_tap(miss), TapResult::NoHit);
        assert_eq!(session.marker_count(), markers);
        assert_eq!(session.has_label(), had_label);
        assert_eq!(session.renderer().adds, adds);
        session.on_screen_tap(Vec2::new(1.0, 1.0));
    }
}

#[test]
fn tap_results_cycle() {
    let mut session = make_session();
    let expected = [
        TapResult::MarkerAdded(1),
        TapResult::MarkerAdded(2),
        TapResult::Reset,
        TapResult::MarkerAdded(1),
        TapResult::MarkerAdded(2),
        TapResult::Reset,
    ];
    for (i, want) in expected.into_iter().enumerate() {
        let got = session.on_screen_tap(Vec2::new(i as f32, 0.0));
        assert_eq!(got, want, "tap {i}");
    }
}

#[test]
fn begin_session_starts_from_empty() {
    let mut session = make_session();
    session.on_screen_tap(Vec2::new(0.0, 0.0));
    session.on_screen_tap(Vec2::new(1.0, 0.0));
    assert!(session.has_label());

    session.begin_session();
    assert_eq!(session.marker_count(), 0);
    assert!(!session.has_label());
    assert!(session.renderer().live.is_empty());
}

#[test]
fn every_add_is_matched_by_a_remove() {
    let mut session = make_session();
    // A long mixed run: hits, misses, several full cycles.
    for i in 0..50 {
        let screen = if i % 7 == 0 {
            Vec2::new(-1.0, 0.0)
        } else {
            Vec2::new(i as f32, (i % 3) as f32)
        };
        session.on_screen_tap(screen);
        assert!(session.renderer().labels_live <= 1);
    }
    session.begin_session();

    let (_, scene) = session.into_parts();
    assert!(scene.live.is_empty(), "leaked renderer nodes: {:?}", scene.live);
    assert_eq!(scene.adds, scene.removes);
}
