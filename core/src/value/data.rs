use crate::{
    convert::{DictConvertible, FromData},
    error::Result,
    value::{dict::Dict, intermediate::Number},
};
use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

/// Live object graph: the intermediate shapes plus dict-convertible objects.
#[derive(Debug, Default, Clone)]
pub enum Data {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Data>),
    Mapping(Vec<(Data, Data)>),
    Object(Arc<dyn DictConvertible>),
}

impl Data {
    pub fn object<T>(value: T) -> Self
    where
        T: DictConvertible,
    {
        Self::Object(Arc::new(value))
    }

    pub fn sequence_from<T: Into<Data>>(value: impl IntoIterator<Item = T>) -> Self {
        Self::Sequence(value.into_iter().map(|item| item.into()).collect())
    }

    pub fn mapping_from<K: Into<Data>, V: Into<Data>>(
        value: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self::Mapping(
            value
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
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

    pub fn as_sequence(&self) -> Option<&[Data]> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(Data, Data)]> {
        match self {
            Self::Mapping(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<dyn DictConvertible>> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: DictConvertible,
    {
        match self {
            Self::Object(object) => (**object).as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn is<T>(&self) -> bool
    where
        T: DictConvertible,
    {
        self.downcast_ref::<T>().is_some()
    }

    /// Converts into a typed value, e.g. `Arc<Point>` or `Vec<Arc<Point>>`.
    pub fn into_typed<T>(self) -> Result<T>
    where
        T: FromData,
    {
        T::from_data(self)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
            Self::Object(_) => "object",
        }
    }
}

impl PartialEq for Data {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Mapping(a), Self::Mapping(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => {
                a.type_name() == b.type_name() && a.to_dict() == b.to_dict()
            }
            _ => false,
        }
    }
}

macro_rules! impl_data_from_number {
    ( $( $type:ty ),+ ) => {
        $(
            impl From<$type> for Data {
                fn from(v: $type) -> Self {
                    Self::Number(v.into())
                }
            }
        )+
    };
}

impl_data_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<()> for Data {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Data {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Number> for Data {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Data {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Data {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Dict> for Data {
    fn from(v: Dict) -> Self {
        Self::Mapping(
            v.into_iter()
                .map(|(key, value)| (Self::String(key), value))
                .collect(),
        )
    }
}

impl<T> From<Arc<T>> for Data
where
    T: DictConvertible,
{
    fn from(v: Arc<T>) -> Self {
        Self::Object(v)
    }
}

impl<T> From<Vec<T>> for Data
where
    T: Into<Data>,
{
    fn from(v: Vec<T>) -> Self {
        Self::sequence_from(v)
    }
}

impl<T> From<Option<T>> for Data
where
    T: Into<Data>,
{
    fn from(v: Option<T>) -> Self {
        v.map(|v| v.into()).unwrap_or_default()
    }
}

impl<K, V> From<HashMap<K, V>> for Data
where
    K: Into<Data>,
    V: Into<Data>,
{
    fn from(v: HashMap<K, V>) -> Self {
        Self::mapping_from(v)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Data
where
    K: Into<Data>,
    V: Into<Data>,
{
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::mapping_from(v)
    }
}
