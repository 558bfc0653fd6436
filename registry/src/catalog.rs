//! The PROV definition catalog.

use crate::{AttributeDef, AttributeOwner, EndpointDef, NodeConstraint, RelationDef, ValueRange};
use prov_core::{NodeVariant, RelationVariant};

const fn only(key: &'static str, variant: NodeVariant) -> EndpointDef {
    EndpointDef {
        key,
        constraint: NodeConstraint::Only(variant),
    }
}

const fn any(key: &'static str) -> EndpointDef {
    EndpointDef {
        key,
        constraint: NodeConstraint::Any,
    }
}

use NodeVariant::{Activity, Agent, Entity};

/// Relation definitions, indexed in [`RelationVariant::ALL`] order.
pub(crate) static RELATIONS: [RelationDef; 14] = [
    RelationDef {
        variant: RelationVariant::Generation,
        name: "Generation",
        domain: only("prov:entity", Entity),
        range: only("prov:activity", Activity),
        optional_keys: &["prov:time"],
        documentation: "Generation is the completion of production of a new entity by an activity.",
        url: "https://www.w3.org/TR/prov-o/#wasGeneratedBy",
    },
    RelationDef {
        variant: RelationVariant::Usage,
        name: "Usage",
        domain: only("prov:activity", Activity),
        range: only("prov:entity", Entity),
        optional_keys: &["prov:time"],
        documentation: "Usage is the beginning of utilizing an entity by an activity.",
        url: "https://www.w3.org/TR/prov-o/#used",
    },
    RelationDef {
        variant: RelationVariant::Communication,
        name: "Communication",
        domain: only("prov:informed", Activity),
        range: only("prov:informant", Activity),
        optional_keys: &[],
        documentation: "Communication is the exchange of an entity by two activities, one activity using the entity generated by the other.",
        url: "https://www.w3.org/TR/prov-o/#wasInformedBy",
    },
    RelationDef {
        variant: RelationVariant::Start,
        name: "Start",
        domain: only("prov:activity", Activity),
        range: only("prov:trigger", Entity),
        optional_keys: &["prov:starter", "prov:time"],
        documentation: "Start is when an activity is deemed to have been started by an entity, known as trigger.",
        url: "https://www.w3.org/TR/prov-o/#wasStartedBy",
    },
    RelationDef {
        variant: RelationVariant::End,
        name: "End",
        domain: only("prov:activity", Activity),
        range: only("prov:trigger", Entity),
        optional_keys: &["prov:ender", "prov:time"],
        documentation: "End is when an activity is deemed to have been ended by an entity, known as trigger.",
        url: "https://www.w3.org/TR/prov-o/#wasEndedBy",
    },
    RelationDef {
        variant: RelationVariant::Invalidation,
        name: "Invalidation",
        domain: only("prov:entity", Entity),
        range: only("prov:activity", Activity),
        optional_keys: &["prov:time"],
        documentation: "Invalidation is the start of the destruction, cessation, or expiry of an existing entity by an activity.",
        url: "https://www.w3.org/TR/prov-o/#wasInvalidatedBy",
    },
    RelationDef {
        variant: RelationVariant::Derivation,
        name: "Derivation",
        domain: only("prov:generatedEntity", Entity),
        range: only("prov:usedEntity", Entity),
        optional_keys: &["prov:activity", "prov:generation", "prov:usage"],
        documentation: "A derivation is a transformation of an entity into another, an update of an entity resulting in a new one, or the construction of a new entity based on a pre-existing entity.",
        url: "https://www.w3.org/TR/prov-o/#wasDerivedFrom",
    },
    RelationDef {
        variant: RelationVariant::Attribution,
        name: "Attribution",
        domain: only("prov:entity", Entity),
        range: only("prov:agent", Agent),
        optional_keys: &[],
        documentation: "Attribution is the ascribing of an entity to an agent.",
        url: "https://www.w3.org/TR/prov-o/#wasAttributedTo",
    },
    RelationDef {
        variant: RelationVariant::Association,
        name: "Association",
        domain: only("prov:activity", Activity),
        range: only("prov:agent", Agent),
        optional_keys: &["prov:plan"],
        documentation: "An activity association is an assignment of responsibility to an agent for an activity.",
        url: "https://www.w3.org/TR/prov-o/#wasAssociatedWith",
    },
    RelationDef {
        variant: RelationVariant::Delegation,
        name: "Delegation",
        domain: only("prov:delegate", Agent),
        range: only("prov:responsible", Agent),
        optional_keys: &["prov:activity"],
        documentation: "Delegation is the assignment of authority and responsibility to an agent to act on behalf of another agent.",
        url: "https://www.w3.org/TR/prov-o/#actedOnBehalfOf",
    },
    RelationDef {
        variant: RelationVariant::Influence,
        name: "Influence",
        domain: any("prov:influencee"),
        range: any("prov:influencer"),
        optional_keys: &[],
        documentation: "Influence is the capacity of an entity, activity, or agent to have an effect on the character, development, or behavior of another.",
        url: "https://www.w3.org/TR/prov-o/#wasInfluencedBy",
    },
    RelationDef {
        variant: RelationVariant::Specialization,
        name: "Specialization",
        domain: only("prov:specificEntity", Entity),
        range: only("prov:generalEntity", Entity),
        optional_keys: &[],
        documentation: "An entity that is a specialization of another shares all aspects of the latter, and additionally presents more specific aspects of the same thing.",
        url: "https://www.w3.org/TR/prov-o/#specializationOf",
    },
    RelationDef {
        variant: RelationVariant::Alternate,
        name: "Alternate",
        domain: only("prov:alternate1", Entity),
        range: only("prov:alternate2", Entity),
        optional_keys: &[],
        documentation: "Two alternate entities present aspects of the same thing.",
        url: "https://www.w3.org/TR/prov-o/#alternateOf",
    },
    RelationDef {
        variant: RelationVariant::Membership,
        name: "Membership",
        domain: only("prov:collection", Entity),
        range: only("prov:entity", Entity),
        optional_keys: &[],
        documentation: "Membership is the belonging of an entity to a collection.",
        url: "https://www.w3.org/TR/prov-o/#hadMember",
    },
];

const ALL_NODES: &[AttributeOwner] = &[
    AttributeOwner::Node(Agent),
    AttributeOwner::Node(Activity),
    AttributeOwner::Node(Entity),
];

/// Attribute definitions, protocol-level first, then presentation-level.
pub(crate) static ATTRIBUTES: &[AttributeDef] = &[
    AttributeDef {
        name: "Started At Time",
        key: "prov:startTime",
        domain: &[AttributeOwner::Node(Activity)],
        range: ValueRange::DateTime,
        required: false,
    },
    AttributeDef {
        name: "Ended At Time",
        key: "prov:endTime",
        domain: &[AttributeOwner::Node(Activity)],
        range: ValueRange::DateTime,
        required: false,
    },
    AttributeDef {
        name: "Time",
        key: "prov:time",
        domain: &[
            AttributeOwner::Relation(RelationVariant::Generation),
            AttributeOwner::Relation(RelationVariant::Usage),
            AttributeOwner::Relation(RelationVariant::Start),
            AttributeOwner::Relation(RelationVariant::End),
            AttributeOwner::Relation(RelationVariant::Invalidation),
        ],
        range: ValueRange::DateTime,
        required: false,
    },
    AttributeDef {
        name: "Plan",
        key: "prov:plan",
        domain: &[AttributeOwner::Relation(RelationVariant::Association)],
        range: ValueRange::Node(Entity),
        required: false,
    },
    AttributeDef {
        name: "Starter",
        key: "prov:starter",
        domain: &[AttributeOwner::Relation(RelationVariant::Start)],
        range: ValueRange::Node(Activity),
        required: false,
    },
    AttributeDef {
        name: "Ender",
        key: "prov:ender",
        domain: &[AttributeOwner::Relation(RelationVariant::End)],
        range: ValueRange::Node(Activity),
        required: false,
    },
    AttributeDef {
        name: "Activity",
        key: "prov:activity",
        domain: &[
            AttributeOwner::Relation(RelationVariant::Derivation),
            AttributeOwner::Relation(RelationVariant::Delegation),
        ],
        range: ValueRange::Node(Activity),
        required: false,
    },
    AttributeDef {
        name: "Override Color",
        key: "provviz:color",
        domain: ALL_NODES,
        range: ValueRange::Color,
        required: false,
    },
    AttributeDef {
        name: "Override Shape",
        key: "provviz:shape",
        domain: ALL_NODES,
        range: ValueRange::Shape,
        required: false,
    },
    AttributeDef {
        name: "Hide Attributes",
        key: "provviz:hideAttributes",
        domain: ALL_NODES,
        range: ValueRange::Boolean,
        required: false,
    },
];
