use crate::de::value::ValueVisitor;
use serde::{
    ser::{SerializeMap, SerializeSeq},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Reserved mapping key that marks a tagged mapping.
pub const CLASSNAME_KEY: &str = "__classname__";

#[derive(Debug, Clone, Copy)]
pub enum Number {
    SignedInteger(i64),
    UnsignedInteger(u64),
    Float(f64),
}

impl Number {
    pub fn as_signed_integer(&self) -> Option<i64> {
        match self {
            Self::SignedInteger(v) => Some(*v),
            Self::UnsignedInteger(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn as_unsigned_integer(&self) -> Option<u64> {
        match self {
            Self::SignedInteger(v) => u64::try_from(*v).ok(),
            Self::UnsignedInteger(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Self::SignedInteger(v) => Some(*v as _),
            Self::UnsignedInteger(v) => Some(*v as _),
            _ => None,
        }
    }

    /// Any number read as float; integers are converted.
    pub fn as_float(&self) -> f64 {
        match self {
            Self::SignedInteger(v) => *v as _,
            Self::UnsignedInteger(v) => *v as _,
            Self::Float(v) => *v,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits() || a == b,
            (Self::Float(_), _) | (_, Self::Float(_)) => false,
            _ => self.as_integer() == other.as_integer(),
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::SignedInteger(v) => serializer.serialize_i64(*v),
            Self::UnsignedInteger(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

macro_rules! impl_number_from {
    ($type:ty => $variant:ident) => {
        impl From<$type> for Number {
            fn from(value: $type) -> Self {
                Self::$variant(value as _)
            }
        }
    };
}

impl_number_from!(i8 => SignedInteger);
impl_number_from!(i16 => SignedInteger);
impl_number_from!(i32 => SignedInteger);
impl_number_from!(i64 => SignedInteger);
impl_number_from!(isize => SignedInteger);
impl_number_from!(u8 => UnsignedInteger);
impl_number_from!(u16 => UnsignedInteger);
impl_number_from!(u32 => UnsignedInteger);
impl_number_from!(u64 => UnsignedInteger);
impl_number_from!(usize => UnsignedInteger);
impl_number_from!(f32 => Float);
impl_number_from!(f64 => Float);

/// Format-neutral tree exchanged between the escaper and the codecs.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    /// Ordered entries; keys are not restricted to strings.
    Mapping(Vec<(Value, Value)>),
}

impl Value {
    pub fn null() -> Self {
        Self::Null
    }

    pub fn number(value: impl Into<Number>) -> Self {
        Self::Number(value.into())
    }

    pub fn string(value: impl ToString) -> Self {
        Self::String(value.to_string())
    }

    pub fn sequence() -> Self {
        Self::Sequence(Default::default())
    }

    pub fn item(self, value: impl Into<Value>) -> Self {
        match self {
            Self::Sequence(mut result) => {
                result.push(value.into());
                Self::Sequence(result)
            }
            _ => self,
        }
    }

    pub fn mapping() -> Self {
        Self::Mapping(Default::default())
    }

    pub fn property(self, key: impl Into<Value>, value: impl Into<Value>) -> Self {
        match self {
            Self::Mapping(mut result) => {
                let key = key.into();
                let value = value.into();
                if let Some((_, item)) = result.iter_mut().find(|(k, _)| k == &key) {
                    *item = value;
                } else {
                    result.push((key, value));
                }
                Self::Mapping(result)
            }
            _ => self,
        }
    }

    /// Mapping tagged with a type identifier.
    pub fn tagged(identifier: impl ToString) -> Self {
        Self::Mapping(vec![(
            Self::String(CLASSNAME_KEY.to_owned()),
            Self::String(identifier.to_string()),
        )])
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Mapping(v) => Some(v),
            _ => None,
        }
    }

    /// Looks up a mapping entry by string key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    /// Type identifier of a tagged mapping.
    pub fn classname(&self) -> Option<&str> {
        self.get(CLASSNAME_KEY)?.as_str()
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

macro_rules! impl_value_from_number {
    ( $( $type:ty ),+ ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::Number(v.into())
                }
            }
        )+
    };
}

impl_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Sequence(v)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Number(v) => v.serialize(serializer),
            Self::String(v) => serializer.serialize_str(v),
            Self::Sequence(v) => {
                let mut seq = serializer.serialize_seq(Some(v.len()))?;
                for item in v {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(v) => {
                let mut map = serializer.serialize_map(Some(v.len()))?;
                for (k, v) in v {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
