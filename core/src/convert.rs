use crate::{
    error::{BoxError, Error, Result},
    value::{data::Data, dict::Dict, intermediate::Number},
};
use std::{
    any::{type_name, Any},
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    hash::Hash,
    sync::Arc,
};

/// Access to the concrete type behind a trait object.
pub trait AsAny: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T> AsAny for T
where
    T: Any + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Object that can be flattened into a [`Dict`] and rebuilt from one.
/// Prefer to implement using `DictConvertible` derive macro.
///
/// Types are rebuilt by the registry from `Default::default()` followed by
/// [`DictConvertible::from_dict`], unless a custom loader is registered.
///
/// # Example
/// ```rust
/// use dict_intermediate::{BoxError, Dict, DictConvertible};
///
/// #[derive(Debug, Default)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl DictConvertible for Point {
///     fn to_dict(&self) -> Dict {
///         Dict::new().with("x", self.x).with("y", self.y)
///     }
///
///     fn from_dict(mut self, mut dict: Dict) -> Result<Self, BoxError> {
///         self.x = dict.take("x")?;
///         self.y = dict.take("y")?;
///         Ok(self)
///     }
/// }
/// ```
pub trait DictConvertible: AsAny + Debug {
    fn to_dict(&self) -> Dict;

    /// May return a different instance than `self`.
    fn from_dict(self, dict: Dict) -> std::result::Result<Self, BoxError>
    where
        Self: Sized;

    /// Default type identifier of this object.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// Conversion out of the live graph, used by [`Dict::take`].
pub trait FromData: Sized {
    fn from_data(data: Data) -> Result<Self>;
}

fn unexpected<T>(data: &Data) -> Error {
    Error::UnexpectedData {
        expected: type_name::<T>(),
        found: data.kind(),
    }
}

macro_rules! impl_from_data_integer {
    ( $( $type:ty ),+ ) => {
        $(
            impl FromData for $type {
                fn from_data(data: Data) -> Result<Self> {
                    match &data {
                        Data::Number(number) => number
                            .as_integer()
                            .and_then(|v| Self::try_from(v).ok())
                            .ok_or_else(|| unexpected::<Self>(&data)),
                        _ => Err(unexpected::<Self>(&data)),
                    }
                }
            }
        )+
    };
}

impl_from_data_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromData for f64 {
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Number(number) => Ok(number.as_float()),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl FromData for f32 {
    fn from_data(data: Data) -> Result<Self> {
        f64::from_data(data).map(|v| v as _)
    }
}

impl FromData for bool {
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Bool(v) => Ok(v),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl FromData for String {
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::String(v) => Ok(v),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl FromData for Number {
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Number(v) => Ok(v),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl FromData for Data {
    fn from_data(data: Data) -> Result<Self> {
        Ok(data)
    }
}

impl FromData for () {
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Null => Ok(()),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl FromData for Dict {
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Mapping(entries) => entries
                .into_iter()
                .map(|(key, value)| Ok((String::from_data(key)?, value)))
                .collect(),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl<T> FromData for Vec<T>
where
    T: FromData,
{
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Sequence(items) => items.into_iter().map(T::from_data).collect(),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl<T> FromData for Option<T>
where
    T: FromData,
{
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Null => Ok(None),
            data => T::from_data(data).map(Some),
        }
    }
}

impl<K, V> FromData for HashMap<K, V>
where
    K: FromData + Eq + Hash,
    V: FromData,
{
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Mapping(entries) => entries
                .into_iter()
                .map(|(key, value)| Ok((K::from_data(key)?, V::from_data(value)?)))
                .collect(),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl<K, V> FromData for BTreeMap<K, V>
where
    K: FromData + Ord,
    V: FromData,
{
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Mapping(entries) => entries
                .into_iter()
                .map(|(key, value)| Ok((K::from_data(key)?, V::from_data(value)?)))
                .collect(),
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}

impl<T> FromData for Arc<T>
where
    T: DictConvertible,
{
    fn from_data(data: Data) -> Result<Self> {
        match data {
            Data::Object(object) => {
                let found = object.type_name();
                object
                    .into_any()
                    .downcast::<T>()
                    .map_err(|_| Error::UnexpectedData {
                        expected: type_name::<T>(),
                        found,
                    })
            }
            _ => Err(unexpected::<Self>(&data)),
        }
    }
}
