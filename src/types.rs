use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Key of a record in the type database.
///
/// The exporter writes ids as JSON strings (`"type_id":"42"`), other tools emit
/// plain integers. Both normalize to the same string key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawTypeId")]
pub struct TypeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeId {
    Str(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<RawTypeId> for TypeId {
    fn from(raw: RawTypeId) -> Self {
        match raw {
            RawTypeId::Str(s) => Self(s),
            RawTypeId::Unsigned(v) => Self(v.to_string()),
            RawTypeId::Signed(v) => Self(v.to_string()),
        }
    }
}

impl TypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category tag of a record (`type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Struct,
    #[serde(rename = "pointer_type")]
    Pointer,
    /// `structure`, written by the debug-info exporter.
    Structure,
    /// `pointer`, written by the debug-info exporter.
    #[serde(rename = "pointer")]
    ExporterPointer,
    #[serde(other)]
    Other,
}

/// Which `type` tags are recognized as aggregates and pointers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagSet {
    /// `class`, `struct` and `pointer_type` only.
    #[default]
    Standard,
    /// Also the exporter's `structure` and `pointer`.
    Exporter,
}

impl TypeKind {
    pub fn is_aggregate(self, tags: TagSet) -> bool {
        match self {
            Self::Class | Self::Struct => true,
            Self::Structure => tags == TagSet::Exporter,
            _ => false,
        }
    }

    pub fn is_pointer(self, tags: TagSet) -> bool {
        match self {
            Self::Pointer => true,
            Self::ExporterPointer => tags == TagSet::Exporter,
            _ => false,
        }
    }
}

/// Decode a field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

// Fields are optional and loosely typed: a field holding the wrong kind of
// value behaves as if it were missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: Option<TypeKind>,
    /// Pointee for pointer records, underlying type for others.
    #[serde(default, deserialize_with = "lenient")]
    pub type_id: Option<TypeId>,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub members: Option<Vec<Member>>,
    /// Base classes, as emitted by the exporter for C++ inheritance.
    #[serde(default, deserialize_with = "lenient")]
    pub parents: Option<Vec<BaseRef>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Member {
    #[serde(default, deserialize_with = "lenient")]
    pub type_id: Option<TypeId>,
    /// Relative to the enclosing aggregate. Missing or invalid offsets read as 0.
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub offset: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

impl Member {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseRef {
    pub id: TypeId,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub offset: u64,
}
