use serde::{Deserialize, Serialize};

use crate::graph::{FlowNode, JourneyGraph};

/// Lifecycle state of a saved journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

/// One entry of the saved-journey list, in the shape the dashboard persists.
///
/// Field names serialize in camelCase to stay byte-compatible with the
/// document the stock builder writes on launch. The engagement counters are
/// plain stored values; nothing in this crate computes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedJourney {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: JourneyStatus,
    pub segment: String,
    /// Total step count, branch contents included.
    pub nodes: usize,
    pub canvas_nodes: Vec<FlowNode>,
    pub created_date: String,
    pub last_modified: String,
    pub created_by: String,
    pub target_segment: String,
    pub total_users: u64,
    pub active_users: u64,
    pub completion_rate: f32,
    pub conversion_rate: f32,
    pub total_conversions: u64,
    pub channels: Vec<String>,
}

impl SavedJourney {
    /// Builds the record written when a journey is launched from the canvas.
    /// Engagement counters start at zero; `date` lands in both the created
    /// and last-modified fields.
    pub fn launched(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        graph: &JourneyGraph,
        segment: impl Into<String>,
        created_by: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let date = date.into();
        let segment = segment.into();
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status: JourneyStatus::Active,
            target_segment: segment.clone(),
            segment,
            nodes: graph.step_count(),
            channels: channels_of(graph.nodes()),
            canvas_nodes: graph.nodes().to_vec(),
            created_date: date.clone(),
            last_modified: date,
            created_by: created_by.into(),
            total_users: 0,
            active_users: 0,
            completion_rate: 0.0,
            conversion_rate: 0.0,
            total_conversions: 0,
        }
    }
}

/// Distinct channels used by Action steps, in first-use order.
fn channels_of(nodes: &[FlowNode]) -> Vec<String> {
    let mut channels: Vec<String> = Vec::new();
    collect_channels(nodes, &mut channels);
    channels
}

fn collect_channels(nodes: &[FlowNode], out: &mut Vec<String>) {
    use crate::graph::{Channel, NodeConfig};
    for node in nodes {
        if let NodeConfig::Action(config) = &node.config {
            if let Some(channel) = config.channel {
                let name = match channel {
                    Channel::Email => "email",
                    Channel::Sms => "sms",
                    Channel::WhatsApp => "whatsapp",
                };
                if !out.iter().any(|c| c == name) {
                    out.push(name.to_string());
                }
            }
        }
        for branch in node.branches() {
            collect_channels(&branch.nodes, out);
        }
    }
}
