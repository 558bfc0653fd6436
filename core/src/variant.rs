//! Node and relation variants.
//!
//! The variant sets are closed: three node kinds and fourteen relation kinds.
//! Each variant knows the container key it occupies in a PROV-JSON scope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three PROV object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeVariant {
    Agent,
    Activity,
    Entity,
}

impl NodeVariant {
    /// All node variants in container order.
    pub const ALL: [NodeVariant; 3] = [NodeVariant::Agent, NodeVariant::Activity, NodeVariant::Entity];

    /// The container key in a PROV-JSON scope.
    pub fn key(&self) -> &'static str {
        match self {
            NodeVariant::Agent => "agent",
            NodeVariant::Activity => "activity",
            NodeVariant::Entity => "entity",
        }
    }

    /// The capitalized name used when generating identifiers.
    pub fn capitalized(&self) -> &'static str {
        match self {
            NodeVariant::Agent => "Agent",
            NodeVariant::Activity => "Activity",
            NodeVariant::Entity => "Entity",
        }
    }

    /// Look up a variant by its container key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

impl fmt::Display for NodeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returns true if `key` names one of the node containers.
pub fn is_node_variant(key: &str) -> bool {
    NodeVariant::from_key(key).is_some()
}

/// One of the fourteen PROV relation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelationVariant {
    #[serde(rename = "wasGeneratedBy")]
    Generation,
    #[serde(rename = "used")]
    Usage,
    #[serde(rename = "wasInformedBy")]
    Communication,
    #[serde(rename = "wasStartedBy")]
    Start,
    #[serde(rename = "wasEndedBy")]
    End,
    #[serde(rename = "wasInvalidatedBy")]
    Invalidation,
    #[serde(rename = "wasDerivedFrom")]
    Derivation,
    #[serde(rename = "wasAttributedTo")]
    Attribution,
    #[serde(rename = "wasAssociatedWith")]
    Association,
    #[serde(rename = "actedOnBehalfOf")]
    Delegation,
    #[serde(rename = "wasInfluencedBy")]
    Influence,
    #[serde(rename = "specializationOf")]
    Specialization,
    #[serde(rename = "alternateOf")]
    Alternate,
    #[serde(rename = "hadMember")]
    Membership,
}

impl RelationVariant {
    /// All relation variants in catalog order.
    pub const ALL: [RelationVariant; 14] = [
        RelationVariant::Generation,
        RelationVariant::Usage,
        RelationVariant::Communication,
        RelationVariant::Start,
        RelationVariant::End,
        RelationVariant::Invalidation,
        RelationVariant::Derivation,
        RelationVariant::Attribution,
        RelationVariant::Association,
        RelationVariant::Delegation,
        RelationVariant::Influence,
        RelationVariant::Specialization,
        RelationVariant::Alternate,
        RelationVariant::Membership,
    ];

    /// The container key in a PROV-JSON scope.
    pub fn key(&self) -> &'static str {
        match self {
            RelationVariant::Generation => "wasGeneratedBy",
            RelationVariant::Usage => "used",
            RelationVariant::Communication => "wasInformedBy",
            RelationVariant::Start => "wasStartedBy",
            RelationVariant::End => "wasEndedBy",
            RelationVariant::Invalidation => "wasInvalidatedBy",
            RelationVariant::Derivation => "wasDerivedFrom",
            RelationVariant::Attribution => "wasAttributedTo",
            RelationVariant::Association => "wasAssociatedWith",
            RelationVariant::Delegation => "actedOnBehalfOf",
            RelationVariant::Influence => "wasInfluencedBy",
            RelationVariant::Specialization => "specializationOf",
            RelationVariant::Alternate => "alternateOf",
            RelationVariant::Membership => "hadMember",
        }
    }

    /// Look up a variant by its container key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

impl fmt::Display for RelationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A top-level key of a PROV-JSON scope object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeField {
    Prefix,
    Node(NodeVariant),
    Relation(RelationVariant),
    Bundle,
}

impl ScopeField {
    pub const PREFIX_KEY: &'static str = "prefix";
    pub const BUNDLE_KEY: &'static str = "bundle";

    /// Classify a scope key; `None` for keys PROV-JSON does not define.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            Self::PREFIX_KEY => Some(ScopeField::Prefix),
            Self::BUNDLE_KEY => Some(ScopeField::Bundle),
            _ => NodeVariant::from_key(key)
                .map(ScopeField::Node)
                .or_else(|| RelationVariant::from_key(key).map(ScopeField::Relation)),
        }
    }
}
