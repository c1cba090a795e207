//! Common test utilities for building canvas graphs and fixtures.
use keiro::prelude::*;

/// Small metrics keep radial-search fixtures readable: a candidate clears a
/// node once their anchors differ by more than 26 on x or 18 on y.
#[allow(dead_code)]
pub fn small_metrics() -> NodeMetrics {
    NodeMetrics::new(20.0, 12.0, 6.0)
}

/// Builds a top-level node with an explicit id and position.
#[allow(dead_code)]
pub fn node_at(id: &str, kind: NodeKind, x: f32, y: f32) -> FlowNode {
    FlowNode::new(id, kind, Point::new(x, y))
}

/// Creates a graph with a trigger feeding a condition node whose If branch
/// holds an action and whose Else branch holds a delay:
///
/// `trigger -> condition [If: action-x | Else: delay-y]`
#[allow(dead_code)]
pub fn graph_with_condition() -> JourneyGraph {
    let trigger = FlowNode {
        successors: Successors::Linear(vec!["node-2".to_string()]),
        ..node_at("node-1", NodeKind::Trigger, 0.0, 0.0)
    };

    let mut condition = node_at("node-2", NodeKind::Condition, 300.0, 0.0);
    condition.successors = Successors::Branches(vec![
        Branch {
            label: "If".to_string(),
            nodes: vec![node_at("node-3", NodeKind::Action, 600.0, 0.0)],
        },
        Branch {
            label: "Else".to_string(),
            nodes: vec![node_at("node-4", NodeKind::Delay, 600.0, 200.0)],
        },
    ]);

    JourneyGraph::from_nodes(vec![trigger, condition], NodeMetrics::default())
}

/// Places one node on every radial candidate around `desired` (plus one on
/// `desired` itself), so the sweep finds no free position and the grid
/// fallback has to fire.
#[allow(dead_code)]
pub fn saturated_cluster(desired: Point) -> Vec<FlowNode> {
    let mut nodes = vec![FlowNode::new("cluster-0", NodeKind::Action, desired)];
    let mut index = 1;
    for step in 1..=5 {
        let radius = step as f32 * 30.0;
        for angle_deg in (0..360).step_by(45) {
            let angle = (angle_deg as f32).to_radians();
            let position = Point::new(
                desired.x + radius * angle.cos(),
                desired.y + radius * angle.sin(),
            );
            nodes.push(FlowNode::new(
                format!("cluster-{}", index),
                NodeKind::Action,
                position,
            ));
            index += 1;
        }
    }
    nodes
}

/// A canvas payload in the editor's JSON shape, condition branches included.
#[allow(dead_code)]
pub fn editor_payload() -> &'static str {
    r#"{
        "nodes": [
            {
                "id": "node-1",
                "type": "trigger",
                "title": "Signup",
                "position": { "x": 80, "y": 40 },
                "config": { "event": "user_signed_up" },
                "connections": ["node-2"]
            },
            {
                "id": "node-2",
                "type": "condition",
                "position": { "x": 380, "y": 40 },
                "config": { "field": "plan", "operator": "equals", "value": "pro" },
                "branches": [
                    {
                        "label": "Match",
                        "nodes": [
                            {
                                "id": "node-3",
                                "type": "action",
                                "position": { "x": 680, "y": 40 },
                                "config": {
                                    "channel": "email",
                                    "templateId": "tpl-9",
                                    "templateName": "Pro welcome",
                                    "subject": "Welcome aboard"
                                }
                            }
                        ]
                    },
                    {
                        "label": "No Match",
                        "nodes": [
                            {
                                "id": "node-4",
                                "type": "delay",
                                "position": { "x": 680, "y": 260 },
                                "config": { "duration": 2, "unit": "hours" }
                            }
                        ]
                    }
                ]
            }
        ]
    }"#
}
