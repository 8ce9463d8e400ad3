//! Property descriptor model.
//!
//! The JSON shape mirrors what prop-table renderers consume: every type is an
//! object tagged by `name`, with an optional `value` whose meaning depends on
//! the tag.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Extracted documentation for one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropsDoc {
    /// Component description, if the source documents one
    pub description: String,

    /// Properties in declaration order
    #[serde(serialize_with = "serialize_entries")]
    pub props: Vec<(String, PropDescriptor)>,
}

impl PropsDoc {
    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&PropDescriptor> {
        self.props.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }
}

/// Metadata for a single property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<TypeDescriptor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_type: Option<TypeDescriptor>,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,

    pub description: String,
}

impl PropDescriptor {
    /// The type to display: a flow annotation wins over a runtime type.
    pub fn effective_type(&self) -> Option<&TypeDescriptor> {
        self.flow_type.as_ref().or(self.type_.as_ref())
    }
}

/// Default value of a property as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultValue {
    pub value: String,
    pub computed: bool,
}

/// A literal member of an `enum` type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    pub value: String,
    pub computed: bool,
}

/// Tagged type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// Named primitive such as `string`, `bool`, `func` or `node`
    Primitive(String),
    ArrayOf(Box<TypeDescriptor>),
    /// Class name the value must be an instance of
    InstanceOf(String),
    Enum(EnumValues),
    Union(UnionMembers),
    /// Nested property mapping
    Shape(Vec<(String, PropDescriptor)>),
}

/// Members of an `enum` type.
#[derive(Debug, Clone, PartialEq)]
pub enum EnumValues {
    Literals(Vec<EnumValue>),
    /// Expression the extractor could not evaluate
    Opaque(String),
}

/// Members of a `union` type.
#[derive(Debug, Clone, PartialEq)]
pub enum UnionMembers {
    Types(Vec<TypeDescriptor>),
    Opaque(String),
}

impl TypeDescriptor {
    /// Tag name of this descriptor.
    pub fn name(&self) -> &str {
        match self {
            Self::Primitive(name) => name,
            Self::ArrayOf(_) => "arrayOf",
            Self::InstanceOf(_) => "instanceOf",
            Self::Enum(_) => "enum",
            Self::Union(_) => "union",
            Self::Shape(_) => "shape",
        }
    }

    /// Short human-readable form used in prop tables.
    pub fn display(&self) -> String {
        match self {
            Self::ArrayOf(inner) => format!("{}[]", inner.name()),
            Self::InstanceOf(class) => class.clone(),
            other => other.name().to_string(),
        }
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_value = !matches!(self, Self::Primitive(_));
        let mut map = serializer.serialize_map(Some(if has_value { 2 } else { 1 }))?;
        map.serialize_entry("name", self.name())?;
        match self {
            Self::Primitive(_) => {}
            Self::ArrayOf(inner) => map.serialize_entry("value", inner)?,
            Self::InstanceOf(class) => map.serialize_entry("value", class)?,
            Self::Enum(EnumValues::Literals(values)) => map.serialize_entry("value", values)?,
            Self::Enum(EnumValues::Opaque(raw)) => map.serialize_entry("value", raw)?,
            Self::Union(UnionMembers::Types(types)) => map.serialize_entry("value", types)?,
            Self::Union(UnionMembers::Opaque(raw)) => map.serialize_entry("value", raw)?,
            Self::Shape(fields) => map.serialize_entry("value", &Entries(fields))?,
        }
        map.end()
    }
}

struct Entries<'a>(&'a [(String, PropDescriptor)]);

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, prop) in self.0 {
            map.serialize_entry(name, prop)?;
        }
        map.end()
    }
}

fn serialize_entries<S: Serializer>(
    entries: &[(String, PropDescriptor)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    Entries(entries).serialize(serializer)
}
