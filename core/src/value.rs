//! Attribute values for PROV nodes and relations.
//!
//! PROV-JSON attribute values are strings, numbers, booleans, typed literals
//! (`{"$": ..., "type": ..., "lang": ...}`) or non-empty arrays of those.
//! Every consumer matches on [`AttributeValue`] exhaustively.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Attribute storage for a node or relation record, in document order.
pub type AttributeSet = IndexMap<String, AttributeValue>;

/// A literal with an explicit datatype and optional language tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypedLiteral {
    /// The literal's string payload (`$`).
    #[serde(rename = "$")]
    pub value: String,
    /// Datatype tag, e.g. `xsd:dateTime`.
    #[serde(rename = "type")]
    pub datatype: String,
    /// Language tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl TypedLiteral {
    pub fn new(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: datatype.into(),
            lang: None,
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

/// A single (non-array) literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    String(String),
    Number(Number),
    Boolean(bool),
    Typed(TypedLiteral),
}

impl Literal {
    fn rewrite(&self, include_datatypes: bool, f: &impl Fn(&str) -> Option<String>) -> Option<Literal> {
        match self {
            Literal::String(s) => f(s).map(Literal::String),
            Literal::Number(_) | Literal::Boolean(_) => None,
            Literal::Typed(typed) => rewrite_typed(typed, include_datatypes, f).map(Literal::Typed),
        }
    }
}

impl From<Literal> for AttributeValue {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::String(s) => AttributeValue::String(s),
            Literal::Number(n) => AttributeValue::Number(n),
            Literal::Boolean(b) => AttributeValue::Boolean(b),
            Literal::Typed(t) => AttributeValue::Typed(t),
        }
    }
}

/// A value that can be stored under an attribute key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawAttributeValue")]
pub enum AttributeValue {
    String(String),
    Number(Number),
    Boolean(bool),
    Typed(TypedLiteral),
    /// Non-empty list of literals.
    Array(Vec<Literal>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAttributeValue {
    String(String),
    Number(Number),
    Boolean(bool),
    Typed(TypedLiteral),
    Array(Vec<Literal>),
}

impl TryFrom<RawAttributeValue> for AttributeValue {
    type Error = &'static str;

    fn try_from(raw: RawAttributeValue) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawAttributeValue::String(s) => AttributeValue::String(s),
            RawAttributeValue::Number(n) => AttributeValue::Number(n),
            RawAttributeValue::Boolean(b) => AttributeValue::Boolean(b),
            RawAttributeValue::Typed(t) => AttributeValue::Typed(t),
            RawAttributeValue::Array(items) if items.is_empty() => {
                return Err("attribute value arrays must not be empty")
            }
            RawAttributeValue::Array(items) => AttributeValue::Array(items),
        })
    }
}

/// Target kind when converting a value with [`AttributeValue::retype`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    /// Typed literal with this datatype tag.
    Typed(String),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => f.write_str("String"),
            ValueKind::Number => f.write_str("Number"),
            ValueKind::Boolean => f.write_str("Boolean"),
            ValueKind::Typed(datatype) => write!(f, "TypedLiteral({})", datatype),
        }
    }
}

impl AttributeValue {
    /// Build an array value; `None` if `items` is empty.
    pub fn array(items: Vec<Literal>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(AttributeValue::Array(items))
        }
    }

    /// Returns true if this is a plain string value.
    pub fn is_string(&self) -> bool {
        matches!(self, AttributeValue::String(_))
    }

    /// Returns true if this is a boolean value.
    pub fn is_boolean(&self) -> bool {
        matches!(self, AttributeValue::Boolean(_))
    }

    /// Get as string reference if this is a plain string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as boolean if this is a Boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as typed literal if this is a Typed value.
    pub fn as_typed(&self) -> Option<&TypedLiteral> {
        match self {
            AttributeValue::Typed(t) => Some(t),
            _ => None,
        }
    }

    /// The textual payload of a string or typed literal.
    pub fn text(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            AttributeValue::Typed(t) => Some(&t.value),
            AttributeValue::Number(_) | AttributeValue::Boolean(_) | AttributeValue::Array(_) => None,
        }
    }

    /// Returns the kind name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeValue::String(_) => "String",
            AttributeValue::Number(_) => "Number",
            AttributeValue::Boolean(_) => "Boolean",
            AttributeValue::Typed(_) => "TypedLiteral",
            AttributeValue::Array(_) => "Array",
        }
    }

    /// Convert a scalar value to another kind through its textual form.
    ///
    /// `None` if the text does not parse as `kind`. Arrays never convert.
    /// A language tag survives a typed-to-typed conversion.
    pub fn retype(&self, kind: &ValueKind) -> Option<AttributeValue> {
        let text = match self {
            AttributeValue::String(s) => s.clone(),
            AttributeValue::Typed(t) => t.value.clone(),
            AttributeValue::Number(n) => n.to_string(),
            AttributeValue::Boolean(b) => b.to_string(),
            AttributeValue::Array(_) => return None,
        };
        match kind {
            ValueKind::String => Some(AttributeValue::String(text)),
            ValueKind::Number => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .map(Number::from)
                    .or_else(|| text.parse::<f64>().ok().and_then(Number::from_f64))
                    .map(AttributeValue::Number)
            }
            ValueKind::Boolean => text.trim().parse::<bool>().ok().map(AttributeValue::Boolean),
            ValueKind::Typed(datatype) => Some(AttributeValue::Typed(TypedLiteral {
                value: text,
                datatype: datatype.clone(),
                lang: self.as_typed().and_then(|t| t.lang.clone()),
            })),
        }
    }

    /// Rewrite the string payloads of this value.
    ///
    /// `f` is applied to plain strings, typed-literal payloads and array
    /// elements, and to typed-literal datatype tags if `include_datatypes`.
    /// Returns `None` when nothing changed.
    pub fn rewrite_strings(
        &self,
        include_datatypes: bool,
        f: &impl Fn(&str) -> Option<String>,
    ) -> Option<AttributeValue> {
        match self {
            AttributeValue::String(s) => f(s).map(AttributeValue::String),
            AttributeValue::Number(_) | AttributeValue::Boolean(_) => None,
            AttributeValue::Typed(typed) => {
                rewrite_typed(typed, include_datatypes, f).map(AttributeValue::Typed)
            }
            AttributeValue::Array(items) => {
                let rewritten: Vec<Option<Literal>> = items
                    .iter()
                    .map(|item| item.rewrite(include_datatypes, f))
                    .collect();
                if rewritten.iter().all(Option::is_none) {
                    return None;
                }
                Some(AttributeValue::Array(
                    rewritten
                        .into_iter()
                        .zip(items)
                        .map(|(new, old)| new.unwrap_or_else(|| old.clone()))
                        .collect(),
                ))
            }
        }
    }
}

fn rewrite_typed(
    typed: &TypedLiteral,
    include_datatypes: bool,
    f: &impl Fn(&str) -> Option<String>,
) -> Option<TypedLiteral> {
    let value = f(&typed.value);
    let datatype = if include_datatypes { f(&typed.datatype) } else { None };
    if value.is_none() && datatype.is_none() {
        return None;
    }
    Some(TypedLiteral {
        value: value.unwrap_or_else(|| typed.value.clone()),
        datatype: datatype.unwrap_or_else(|| typed.datatype.clone()),
        lang: typed.lang.clone(),
    })
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "\"{}\"", s),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Typed(t) => match &t.lang {
                Some(lang) => write!(f, "\"{}\"@{}^^{}", t.value, lang, t.datatype),
                None => write!(f, "\"{}\"^^{}", t.value, t.datatype),
            },
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "\"{}\"", s),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Boolean(b) => write!(f, "{}", b),
            AttributeValue::Typed(t) => write!(f, "{}", Literal::Typed(t.clone())),
            AttributeValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boolean(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Number(Number::from(i))
    }
}

impl From<i32> for AttributeValue {
    fn from(i: i32) -> Self {
        AttributeValue::Number(Number::from(i))
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<TypedLiteral> for AttributeValue {
    fn from(t: TypedLiteral) -> Self {
        AttributeValue::Typed(t)
    }
}

/// Helper macro to create attribute sets.
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::AttributeSet::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut set = $crate::AttributeSet::new();
            $(
                set.insert($key.to_string(), $crate::AttributeValue::from($value));
            )+
            set
        }
    };
}
