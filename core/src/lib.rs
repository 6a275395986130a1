pub mod codec;
pub mod convert;
pub mod de;
pub mod error;
pub mod options;
pub mod registry;
pub mod ser;
pub mod serialise;
pub mod value;

#[cfg(test)]
mod tests;

pub use crate::{
    codec::Codec,
    convert::{AsAny, DictConvertible, FromData},
    de::unescape::{unescape, unescape_with},
    error::{BoxError, Error},
    options::Options,
    registry::{Loader, Registry, Resolution},
    ser::escape::{escape, escape_with},
    serialise::{dumps, dumps_with, loads, loads_as, loads_as_with, loads_with},
    value::{
        data::Data,
        dict::Dict,
        intermediate::{Number, Value, CLASSNAME_KEY},
    },
};
#[cfg(feature = "derive")]
pub use dict_intermediate_derive::DictConvertible;
