//! Scene renderer that renders to the log and audits node lifetimes.
//!
//! Every add mints a fresh handle and enters the live-node ledger; every
//! remove retires one. After a run the shell checks the ledger is empty,
//! which is exactly the core's add/remove balance guarantee.

use fnv::FnvHashMap;
use glam::Vec3;
use measure_core::{LabelHandle, NodeHandle, SceneRenderer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeKind {
    Marker,
    Label,
}

#[derive(Default)]
pub struct LoggingScene {
    next_id: u64,
    live: FnvHashMap<u64, NodeKind>,
    adds: usize,
    removes: usize,
}

impl LoggingScene {
    fn mint(&mut self, kind: NodeKind) -> u64 {
        self.next_id += 1;
        self.live.insert(self.next_id, kind);
        self.adds += 1;
        self.next_id
    }

    fn retire(&mut self, id: u64, kind: NodeKind) {
        self.removes += 1;
        match self.live.remove(&id) {
            Some(k) if k == kind => {}
            Some(k) => log::warn!("[scene] node #{id} removed as {kind:?} but was {k:?}"),
            None => log::warn!("[scene] remove of unknown node #{id}"),
        }
    }

    /// Nodes added but not yet removed.
    pub fn outstanding(&self) -> usize {
        self.live.len()
    }

    pub fn adds(&self) -> usize {
        self.adds
    }

    pub fn removes(&self) -> usize {
        self.removes
    }
}

impl SceneRenderer for LoggingScene {
    fn add_marker(&mut self, position: Vec3) -> NodeHandle {
        let id = self.mint(NodeKind::Marker);
        log::info!(
            "[scene] + marker #{id} at ({:.3},{:.3},{:.3})",
            position.x,
            position.y,
            position.z
        );
        NodeHandle(id)
    }

    fn remove_marker(&mut self, node: NodeHandle) {
        self.retire(node.0, NodeKind::Marker);
        log::info!("[scene] - marker #{}", node.0);
    }

    fn add_label(&mut self, text: &str, position: Vec3) -> LabelHandle {
        let id = self.mint(NodeKind::Label);
        log::info!(
            "[scene] + label #{id} \"{text}\" at ({:.3},{:.3},{:.3})",
            position.x,
            position.y,
            position.z
        );
        LabelHandle(id)
    }

    fn remove_label(&mut self, label: LabelHandle) {
        self.retire(label.0, NodeKind::Label);
        log::info!("[scene] - label #{}", label.0);
    }
}
