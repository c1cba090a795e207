use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use super::node::{FlowNode, NodeId, NodeKind, NodePatch, Successors};
use crate::geometry::{NodeMetrics, Point};
use crate::placement;

/// The in-memory journey canvas: an ordered collection of top-level nodes
/// plus the placement metrics and selection state the builder UI works with.
///
/// All mutation operations are total: referencing an id that does not exist
/// is a silent no-op, never an error. The store is single-writer; there is
/// no locking and no interior mutability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyGraph {
    nodes: Vec<FlowNode>,
    metrics: NodeMetrics,
    next_id: u64,
    selected: Option<NodeId>,
}

impl Default for JourneyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl JourneyGraph {
    pub fn new() -> Self {
        Self::with_metrics(NodeMetrics::default())
    }

    pub fn with_metrics(metrics: NodeMetrics) -> Self {
        Self {
            nodes: Vec::new(),
            metrics,
            next_id: 1,
            selected: None,
        }
    }

    /// Rebuilds a graph from already-constructed nodes (import path). The id
    /// counter is advanced past every numeric id suffix so freshly added
    /// nodes cannot collide with imported ones.
    pub fn from_nodes(nodes: Vec<FlowNode>, metrics: NodeMetrics) -> Self {
        let mut max_seen = 0u64;
        Self::for_each(&nodes, &mut |node| {
            if let Some(n) = node.id.rsplit('-').next().and_then(|s| s.parse::<u64>().ok()) {
                max_seen = max_seen.max(n);
            }
        });
        Self {
            next_id: max_seen + 1,
            nodes,
            metrics,
            selected: None,
        }
    }

    pub fn metrics(&self) -> &NodeMetrics {
        &self.metrics
    }

    /// Top-level canvas nodes, in insertion order.
    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    /// Number of top-level canvas nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of steps including nodes nested inside branches.
    pub fn step_count(&self) -> usize {
        let mut count = 0;
        Self::for_each(&self.nodes, &mut |_| count += 1);
        count
    }

    /// Looks a node up anywhere on the canvas, branch contents included.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        Self::find_in(&self.nodes, id)
    }

    pub fn selected(&self) -> Option<&FlowNode> {
        self.selected.as_deref().and_then(|id| self.node(id))
    }

    /// Marks the node as selected; no-op if the id does not exist.
    pub fn select(&mut self, id: &str) {
        if self.node(id).is_some() {
            self.selected = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Drops a new node of `kind` near `desired`, running the placement
    /// search against the current top-level nodes. Returns the fresh id.
    pub fn add_node(&mut self, kind: NodeKind, desired: Point) -> NodeId {
        let position = placement::find_position(desired, &self.nodes, &self.metrics);
        let id = format!("node-{}", self.next_id);
        self.next_id += 1;
        self.nodes.push(FlowNode::new(id.clone(), kind, position));
        id
    }

    /// Merges `patch` into the node with `id`, wherever it lives. Silent
    /// no-op if the id is absent. A `connections` patch only applies to
    /// nodes with linear successors.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) {
        Self::visit_mut(&mut self.nodes, id, &mut |node| {
            if let Some(title) = patch.title.clone() {
                node.title = title;
            }
            if let Some(description) = patch.description.clone() {
                node.description = description;
            }
            if let Some(category) = patch.category.clone() {
                node.category = category;
            }
            if let Some(position) = patch.position {
                node.position = position;
            }
            if let Some(config) = patch.config.clone() {
                node.config = config;
            }
            if let Some(connections) = patch.connections.clone() {
                if let Successors::Linear(ids) = &mut node.successors {
                    *ids = connections;
                }
            }
        });
    }

    /// Removes the node with `id` from the canvas and from every branch's
    /// nested list, scrubs edges that pointed at it, and clears the
    /// selection if it referenced the deleted node.
    pub fn delete_node(&mut self, id: &str) {
        if !Self::remove_in(&mut self.nodes, id) {
            return;
        }
        Self::scrub_edges(&mut self.nodes, id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    /// Appends a directed edge `from -> to`. No-op unless both nodes exist
    /// and `from` has linear successors. Cycles are permitted; nothing in
    /// this crate traverses edges.
    pub fn connect(&mut self, from: &str, to: &str) {
        if self.node(to).is_none() {
            return;
        }
        let to = to.to_string();
        Self::visit_mut(&mut self.nodes, from, &mut |node| {
            if let Successors::Linear(ids) = &mut node.successors {
                ids.push(to.clone());
            }
        });
    }

    /// Removes the first edge `from -> to`, if present.
    pub fn disconnect(&mut self, from: &str, to: &str) {
        Self::visit_mut(&mut self.nodes, from, &mut |node| {
            if let Successors::Linear(ids) = &mut node.successors {
                if let Some(index) = ids.iter().position(|t| t == to) {
                    ids.remove(index);
                }
            }
        });
    }

    /// Edges whose target id resolves to no node on the canvas, reported as
    /// `(source, missing target)` pairs. Deletion scrubs edges, so dangling
    /// references can only come in through an import.
    pub fn dangling_references(&self) -> Vec<(NodeId, NodeId)> {
        let mut known = AHashSet::new();
        Self::for_each(&self.nodes, &mut |node| {
            known.insert(node.id.clone());
        });

        let mut dangling = Vec::new();
        Self::for_each(&self.nodes, &mut |node| {
            for target in node.connections() {
                if !known.contains(target) {
                    dangling.push((node.id.clone(), target.clone()));
                }
            }
        });
        dangling
    }

    fn for_each<'a>(nodes: &'a [FlowNode], f: &mut impl FnMut(&'a FlowNode)) {
        for node in nodes {
            f(node);
            for branch in node.branches() {
                Self::for_each(&branch.nodes, f);
            }
        }
    }

    fn find_in<'a>(nodes: &'a [FlowNode], id: &str) -> Option<&'a FlowNode> {
        for node in nodes {
            if node.id == id {
                return Some(node);
            }
            for branch in node.branches() {
                if let Some(found) = Self::find_in(&branch.nodes, id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Applies `f` to the first node matching `id`, searching branch
    /// contents depth-first. Returns whether a node was found.
    fn visit_mut(nodes: &mut [FlowNode], id: &str, f: &mut impl FnMut(&mut FlowNode)) -> bool {
        for node in nodes.iter_mut() {
            if node.id == id {
                f(node);
                return true;
            }
            if let Successors::Branches(branches) = &mut node.successors {
                for branch in branches.iter_mut() {
                    if Self::visit_mut(&mut branch.nodes, id, f) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn remove_in(nodes: &mut Vec<FlowNode>, id: &str) -> bool {
        let before = nodes.len();
        nodes.retain(|node| node.id != id);
        let mut removed = nodes.len() != before;
        for node in nodes.iter_mut() {
            if let Successors::Branches(branches) = &mut node.successors {
                for branch in branches.iter_mut() {
                    removed |= Self::remove_in(&mut branch.nodes, id);
                }
            }
        }
        removed
    }

    fn scrub_edges(nodes: &mut [FlowNode], id: &str) {
        for node in nodes.iter_mut() {
            match &mut node.successors {
                Successors::Linear(ids) => ids.retain(|target| target != id),
                Successors::Branches(branches) => {
                    for branch in branches.iter_mut() {
                        Self::scrub_edges(&mut branch.nodes, id);
                    }
                }
            }
        }
    }
}
