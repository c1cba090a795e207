//! Conversion from external editor payloads into the canonical canvas model.
//!
//! The crate is format-agnostic: frontends keep their own JSON shapes and
//! implement [`IntoJourney`] to translate them. [`RawCanvas`] covers the
//! payload the stock drag-and-drop builder emits, aliases and all.

use ahash::AHashSet;
use serde::Deserialize;

use super::node::{
    ActionConfig, Branch, Channel, ConditionConfig, DelayConfig, DelayUnit, FlowNode, NodeConfig,
    NodeKind, SegmentationConfig, SplitConfig, Successors, TriggerConfig,
};
use super::store::JourneyGraph;
use crate::error::ImportError;
use crate::geometry::{NodeMetrics, Point};

/// A trait for custom editor formats that can be converted into a
/// [`JourneyGraph`].
///
/// This is the primary extension point for supporting other canvas
/// frontends. Implement it on the structs you parse your own payload into
/// and hand the result to the store, the archive, or the vault.
pub trait IntoJourney {
    /// Consumes the object and converts it into a canvas graph.
    fn into_journey(self) -> Result<JourneyGraph, ImportError>;
}

/// Canvas payload as emitted by the stock journey/automation builder.
#[derive(Debug, Deserialize)]
pub struct RawCanvas {
    pub nodes: Vec<RawCanvasNode>,
}

impl RawCanvas {
    /// Parses a payload straight from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|e| ImportError::JsonParseError(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub struct RawCanvasNode {
    pub id: String,
    #[serde(alias = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub position: RawPoint,
    #[serde(default)]
    pub config: RawNodeConfig,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub branches: Vec<RawBranch>,
}

#[derive(Debug, Deserialize)]
pub struct RawPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Deserialize)]
pub struct RawBranch {
    pub label: String,
    #[serde(default)]
    pub nodes: Vec<RawCanvasNode>,
}

/// The editor's open config bag. Which fields are meaningful depends on the
/// node kind; unknown fields are dropped on conversion.
#[derive(Debug, Default, Deserialize)]
pub struct RawNodeConfig {
    pub event: Option<String>,
    pub segment: Option<String>,
    pub field: Option<String>,
    pub operator: Option<String>,
    pub value: Option<String>,
    pub channel: Option<String>,
    #[serde(alias = "templateId")]
    pub template_id: Option<String>,
    #[serde(alias = "templateName")]
    pub template_name: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
    pub duration: Option<u32>,
    pub unit: Option<String>,
    pub percentage: Option<u8>,
}

impl IntoJourney for RawCanvas {
    fn into_journey(self) -> Result<JourneyGraph, ImportError> {
        let mut seen = AHashSet::new();
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| convert_node(raw, &mut seen))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(JourneyGraph::from_nodes(nodes, NodeMetrics::default()))
    }
}

fn convert_node(raw: RawCanvasNode, seen: &mut AHashSet<String>) -> Result<FlowNode, ImportError> {
    if !seen.insert(raw.id.clone()) {
        return Err(ImportError::DuplicateNodeId(raw.id));
    }

    let kind = NodeKind::from_token(&raw.kind).ok_or_else(|| ImportError::UnknownKind {
        node_id: raw.id.clone(),
        token: raw.kind.clone(),
    })?;

    if kind != NodeKind::Condition && !raw.branches.is_empty() {
        return Err(ImportError::UnexpectedBranches { node_id: raw.id });
    }

    let successors = if kind == NodeKind::Condition {
        let branches = if raw.branches.is_empty() {
            vec![Branch::new("If"), Branch::new("Else")]
        } else {
            raw.branches
                .into_iter()
                .map(|raw_branch| {
                    let nodes = raw_branch
                        .nodes
                        .into_iter()
                        .map(|nested| convert_node(nested, seen))
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(Branch {
                        label: raw_branch.label,
                        nodes,
                    })
                })
                .collect::<Result<Vec<_>, ImportError>>()?
        };
        Successors::Branches(branches)
    } else {
        Successors::Linear(raw.connections)
    };

    Ok(FlowNode {
        title: raw
            .title
            .unwrap_or_else(|| kind.default_title().to_string()),
        description: raw
            .description
            .unwrap_or_else(|| kind.default_description().to_string()),
        id: raw.id,
        kind,
        category: raw.category,
        position: Point::new(raw.position.x, raw.position.y),
        config: convert_config(kind, raw.config),
        successors,
    })
}

fn convert_config(kind: NodeKind, raw: RawNodeConfig) -> NodeConfig {
    match kind {
        NodeKind::Trigger => NodeConfig::Trigger(TriggerConfig {
            event: raw.event,
            segment: raw.segment,
        }),
        NodeKind::Condition => NodeConfig::Condition(ConditionConfig {
            field: raw.field,
            operator: raw.operator,
            value: raw.value,
        }),
        NodeKind::Action => NodeConfig::Action(ActionConfig {
            channel: raw.channel.as_deref().and_then(Channel::from_token),
            template_id: raw.template_id,
            template_name: raw.template_name,
            subject: raw.subject,
            content: raw.content,
        }),
        NodeKind::Delay => {
            let defaults = DelayConfig::default();
            NodeConfig::Delay(DelayConfig {
                duration: raw.duration.unwrap_or(defaults.duration),
                unit: raw
                    .unit
                    .as_deref()
                    .and_then(delay_unit_from_token)
                    .unwrap_or(defaults.unit),
            })
        }
        NodeKind::Split => {
            let defaults = SplitConfig::default();
            NodeConfig::Split(SplitConfig {
                percentage: raw.percentage.unwrap_or(defaults.percentage),
            })
        }
        NodeKind::Segmentation => NodeConfig::Segmentation(SegmentationConfig {
            segment: raw.segment,
        }),
    }
}

fn delay_unit_from_token(token: &str) -> Option<DelayUnit> {
    match token {
        "minutes" => Some(DelayUnit::Minutes),
        "hours" => Some(DelayUnit::Hours),
        "days" => Some(DelayUnit::Days),
        _ => None,
    }
}
