//! Definition types.

use prov_core::{AttributeValue, NodeVariant, RelationVariant};
use regex_lite::Regex;
use std::fmt;
use std::sync::LazyLock;

// `None` only if a pattern fails to compile, which rejects every value.
static HEX_COLOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").ok());
static DATE_TIME: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}(?:[T ]\d{2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?)?$").ok()
});

/// Which node variants a relation endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeConstraint {
    /// Exactly one variant.
    Only(NodeVariant),
    /// Any of the three variants (influence).
    Any,
}

impl NodeConstraint {
    /// Check whether a node of `variant` may sit at this endpoint.
    pub fn accepts(&self, variant: NodeVariant) -> bool {
        match self {
            NodeConstraint::Only(expected) => *expected == variant,
            NodeConstraint::Any => true,
        }
    }

    /// The accepted variants, in node-variant order.
    pub fn variants(&self) -> Vec<NodeVariant> {
        NodeVariant::ALL
            .into_iter()
            .filter(|v| self.accepts(*v))
            .collect()
    }
}

impl fmt::Display for NodeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeConstraint::Only(variant) => write!(f, "{}", variant),
            NodeConstraint::Any => f.write_str("any"),
        }
    }
}

/// One endpoint role of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDef {
    /// Attribute key holding the endpoint identifier (e.g. `prov:entity`).
    pub key: &'static str,
    /// Node variant(s) the endpoint must reference.
    pub constraint: NodeConstraint,
}

/// Relation variant definition.
#[derive(Debug, Clone, Copy)]
pub struct RelationDef {
    pub variant: RelationVariant,
    /// Human-readable name (e.g. "Generation").
    pub name: &'static str,
    /// The endpoint the relation goes out of.
    pub domain: EndpointDef,
    /// The endpoint the relation points at.
    pub range: EndpointDef,
    /// Further recognized keys (time, plan, trigger…).
    pub optional_keys: &'static [&'static str],
    /// Documentation text, passed through untouched.
    pub documentation: &'static str,
    /// Reference URL, passed through untouched.
    pub url: &'static str,
}

impl RelationDef {
    /// The two endpoints, domain first.
    pub fn endpoints(&self) -> [EndpointDef; 2] {
        [self.domain, self.range]
    }

    /// Check whether `key` is one of the endpoint keys.
    pub fn is_endpoint_key(&self, key: &str) -> bool {
        self.domain.key == key || self.range.key == key
    }
}

/// Value range of an attribute definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRange {
    DateTime,
    Color,
    Boolean,
    Shape,
    /// Identifier of an existing node of this variant.
    Node(NodeVariant),
}

/// Shapes accepted by [`ValueRange::Shape`].
pub const SHAPES: &[&str] = &[
    "box",
    "circle",
    "cylinder",
    "diamond",
    "ellipse",
    "hexagon",
    "house",
    "invhouse",
    "note",
    "octagon",
    "oval",
    "parallelogram",
    "rect",
    "square",
    "trapezium",
    "triangle",
];

impl ValueRange {
    /// Check whether a value conforms to this range.
    ///
    /// Node ranges only check the value is an identifier string; existence of
    /// the node is a referential check made during validation.
    pub fn accepts(&self, value: &AttributeValue) -> bool {
        match self {
            ValueRange::DateTime => match value {
                AttributeValue::String(s) => is_date_time(s),
                AttributeValue::Typed(t) => t.datatype == "xsd:dateTime" && is_date_time(&t.value),
                _ => false,
            },
            ValueRange::Color => value.text().is_some_and(is_hex_color),
            ValueRange::Boolean => value.is_boolean(),
            ValueRange::Shape => value.as_str().is_some_and(|s| SHAPES.contains(&s)),
            ValueRange::Node(_) => value.as_str().is_some_and(|s| !s.is_empty()),
        }
    }

    /// The node variant a reference-valued range points at.
    pub fn node_variant(&self) -> Option<NodeVariant> {
        match self {
            ValueRange::Node(variant) => Some(*variant),
            _ => None,
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRange::DateTime => f.write_str("DateTime"),
            ValueRange::Color => f.write_str("Color"),
            ValueRange::Boolean => f.write_str("Boolean"),
            ValueRange::Shape => f.write_str("Shape"),
            ValueRange::Node(variant) => write!(f, "{}", variant),
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    HEX_COLOR.as_ref().is_some_and(|re| re.is_match(s))
}

/// ISO 8601 date, optionally with a time and offset.
fn is_date_time(s: &str) -> bool {
    DATE_TIME.as_ref().is_some_and(|re| re.is_match(s))
}

/// Something an attribute definition can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeOwner {
    Node(NodeVariant),
    Relation(RelationVariant),
}

/// Well-known attribute definition.
#[derive(Debug, Clone, Copy)]
pub struct AttributeDef {
    /// Display name (e.g. "Started At Time").
    pub name: &'static str,
    /// Storage key (e.g. `prov:startTime`).
    pub key: &'static str,
    /// Variants this attribute applies to.
    pub domain: &'static [AttributeOwner],
    /// Accepted values.
    pub range: ValueRange,
    /// Whether the attribute must be present.
    pub required: bool,
}

impl AttributeDef {
    /// Check if this attribute applies to a node variant.
    pub fn applies_to_node(&self, variant: NodeVariant) -> bool {
        self.domain.contains(&AttributeOwner::Node(variant))
    }

    /// Check if this attribute applies to a relation variant.
    pub fn applies_to_relation(&self, variant: RelationVariant) -> bool {
        self.domain.contains(&AttributeOwner::Relation(variant))
    }
}
