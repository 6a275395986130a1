use crate::value::intermediate::{Number, Value};
use serde::de::{MapAccess, SeqAccess, Visitor};

// Size hints come from untrusted input.
const MAX_PREALLOCATION: usize = 4096;

pub struct ValueVisitor;

macro_rules! impl_visit_number {
    ($name:ident, $type:ty, $variant:ident) => {
        fn $name<E>(self, value: $type) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Value::Number(Number::$variant(value as _)))
        }
    };
}

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("null, bool, number, string, sequence or mapping")
    }

    fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::Bool(value))
    }

    impl_visit_number!(visit_i8, i8, SignedInteger);
    impl_visit_number!(visit_i16, i16, SignedInteger);
    impl_visit_number!(visit_i32, i32, SignedInteger);
    impl_visit_number!(visit_i64, i64, SignedInteger);
    impl_visit_number!(visit_u8, u8, UnsignedInteger);
    impl_visit_number!(visit_u16, u16, UnsignedInteger);
    impl_visit_number!(visit_u32, u32, UnsignedInteger);
    impl_visit_number!(visit_u64, u64, UnsignedInteger);
    impl_visit_number!(visit_f32, f32, Float);
    impl_visit_number!(visit_f64, f64, Float);

    fn visit_i128<E>(self, value: i128) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if let Ok(value) = u64::try_from(value) {
            self.visit_u64(value)
        } else if let Ok(value) = i64::try_from(value) {
            self.visit_i64(value)
        } else {
            self.visit_f64(value as _)
        }
    }

    fn visit_u128<E>(self, value: u128) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => self.visit_f64(value as _),
        }
    }

    fn visit_char<E>(self, value: char) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::String(value.to_string()))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::String(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::String(value))
    }

    fn visit_bytes<E>(self, value: &[u8]) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::Sequence(
            value
                .iter()
                .map(|value| Value::Number(Number::UnsignedInteger(*value as _)))
                .collect(),
        ))
    }

    fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or_default();
        let mut result = Vec::with_capacity(capacity.min(MAX_PREALLOCATION));
        while let Some(v) = access.next_element()? {
            result.push(v);
        }
        Ok(Value::Sequence(result))
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or_default();
        let mut result = Vec::with_capacity(capacity.min(MAX_PREALLOCATION));
        while let Some((k, v)) = access.next_entry()? {
            result.push((k, v));
        }
        Ok(Value::Mapping(result))
    }
}
