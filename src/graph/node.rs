use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Opaque node identifier, assigned by the store at creation and never reused.
pub type NodeId = String;

/// The closed set of step kinds a journey canvas understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Trigger,
    Condition,
    Action,
    Delay,
    Split,
    Segmentation,
}

impl NodeKind {
    /// Parses the kind tokens used by the drag-and-drop editor payloads.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "trigger" => Some(Self::Trigger),
            "condition" => Some(Self::Condition),
            "action" => Some(Self::Action),
            "delay" | "wait" => Some(Self::Delay),
            "split" => Some(Self::Split),
            "segmentation" | "segment" => Some(Self::Segmentation),
            _ => None,
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Trigger => "Trigger",
            Self::Condition => "Condition",
            Self::Action => "Action",
            Self::Delay => "Delay",
            Self::Split => "Split",
            Self::Segmentation => "Segmentation",
        }
    }

    pub fn default_description(&self) -> &'static str {
        match self {
            Self::Trigger => "Starts the journey when the entry event fires",
            Self::Condition => "Routes contacts into a matching branch",
            Self::Action => "Sends a message on the configured channel",
            Self::Delay => "Waits before moving to the next step",
            Self::Split => "Divides contacts across outgoing paths",
            Self::Segmentation => "Filters contacts against a segment",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_title())
    }
}

/// Messaging channel an Action step delivers on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Email,
    Sms,
    WhatsApp,
}

impl Channel {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "email" => Some(Self::Email),
            "sms" => Some(Self::Sms),
            "whatsapp" => Some(Self::WhatsApp),
            _ => None,
        }
    }
}

/// Time unit for Delay steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayUnit {
    Minutes,
    Hours,
    Days,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub event: Option<String>,
    pub segment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionConfig {
    pub field: Option<String>,
    pub operator: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    pub channel: Option<Channel>,
    pub template_id: Option<String>,
    pub template_name: Option<String>,
    pub subject: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayConfig {
    pub duration: u32,
    pub unit: DelayUnit,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            duration: 1,
            unit: DelayUnit::Days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Share of contacts routed to the first outgoing path, in percent.
    pub percentage: u8,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self { percentage: 50 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    pub segment: Option<String>,
}

/// Kind-specific step settings.
///
/// The editor keeps these as one open map; modelling them as a tagged enum
/// recovers type safety while preserving the same observable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeConfig {
    Trigger(TriggerConfig),
    Condition(ConditionConfig),
    Action(ActionConfig),
    Delay(DelayConfig),
    Split(SplitConfig),
    Segmentation(SegmentationConfig),
}

impl NodeConfig {
    /// The empty configuration a freshly dropped node of `kind` starts with.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Trigger => Self::Trigger(TriggerConfig::default()),
            NodeKind::Condition => Self::Condition(ConditionConfig::default()),
            NodeKind::Action => Self::Action(ActionConfig::default()),
            NodeKind::Delay => Self::Delay(DelayConfig::default()),
            NodeKind::Split => Self::Split(SplitConfig::default()),
            NodeKind::Segmentation => Self::Segmentation(SegmentationConfig::default()),
        }
    }
}

/// A named, nested sequence of steps hanging off a Condition node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub label: String,
    pub nodes: Vec<FlowNode>,
}

impl Branch {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            nodes: Vec::new(),
        }
    }
}

/// Successor representation.
///
/// The editor mixes two shapes: most nodes carry a flat id list, while
/// Condition nodes own two independent nested branch sequences. The two
/// shapes are kept as an explicit tagged variant rather than unified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Successors {
    /// Directed edges to other top-level nodes, by id. Order is preserved.
    Linear(Vec<NodeId>),
    /// Named nested sequences owned by this node (Condition only).
    Branches(Vec<Branch>),
}

impl Successors {
    /// The shape a new node of `kind` starts with: Condition nodes get the
    /// If/Else branch pair, everything else an empty edge list.
    pub fn default_for(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Condition => Self::Branches(vec![Branch::new("If"), Branch::new("Else")]),
            _ => Self::Linear(Vec::new()),
        }
    }
}

/// One step on the journey canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub title: String,
    pub description: String,
    /// Grouping label used only for color/icon selection in the UI.
    pub category: Option<String>,
    pub position: Point,
    pub config: NodeConfig,
    pub successors: Successors,
}

impl FlowNode {
    /// Constructs a node with the defaults a fresh drop gets.
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, position: Point) -> Self {
        Self {
            id: id.into(),
            kind,
            title: kind.default_title().to_string(),
            description: kind.default_description().to_string(),
            category: None,
            position,
            config: NodeConfig::default_for(kind),
            successors: Successors::default_for(kind),
        }
    }

    /// Outgoing edge ids, empty for branched nodes.
    pub fn connections(&self) -> &[NodeId] {
        match &self.successors {
            Successors::Linear(ids) => ids,
            Successors::Branches(_) => &[],
        }
    }

    /// Branch list, empty for linear nodes.
    pub fn branches(&self) -> &[Branch] {
        match &self.successors {
            Successors::Branches(branches) => branches,
            Successors::Linear(_) => &[],
        }
    }
}

/// A partial update applied to an existing node; `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Replaces the category: `Some(None)` clears it, the outer `None`
    /// leaves it untouched.
    pub category: Option<Option<String>>,
    pub position: Option<Point>,
    pub config: Option<NodeConfig>,
    /// Replaces the outgoing edge list. Ignored on branched nodes.
    pub connections: Option<Vec<NodeId>>,
}
