use crate::{
    convert::DictConvertible,
    error::{BoxError, Error, Result},
    value::{data::Data, dict::Dict},
};
use std::{
    any::{type_name, TypeId},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

lazy_static::lazy_static! {
    static ref REGISTRY: Registry = Registry::default();
}

/// Custom reconstruction of a tagged payload.
pub type Loader = Arc<dyn Fn(Dict) -> std::result::Result<Data, BoxError> + Send + Sync>;

type Construct = fn(Dict) -> std::result::Result<Data, BoxError>;

fn construct<T>(payload: Dict) -> std::result::Result<Data, BoxError>
where
    T: DictConvertible + Default,
{
    Ok(Data::object(T::default().from_dict(payload)?))
}

struct Entry {
    identifier: String,
    type_id: Option<TypeId>,
    construct: Option<Construct>,
    loader: Option<Loader>,
}

/// How a type identifier is turned back into a live object.
#[derive(Clone)]
pub enum Resolution {
    Loader(Loader),
    Construct(Construct),
}

impl Resolution {
    pub fn is_loader(&self) -> bool {
        matches!(self, Self::Loader(_))
    }

    pub fn reconstruct(&self, identifier: &str, payload: Dict) -> Result<Data> {
        let result = match self {
            Self::Loader(loader) => loader(payload),
            Self::Construct(construct) => construct(payload),
        };
        result.map_err(|source| Error::ReconstructionFailure {
            identifier: identifier.to_owned(),
            source,
        })
    }
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Loader(_) => formatter.write_str("Resolution::Loader"),
            Self::Construct(_) => formatter.write_str("Resolution::Construct"),
        }
    }
}

/// Maps type identifiers to factories and custom loaders.
///
/// [`Registry::global`] is the process-wide instance used by
/// [`crate::dumps`] and [`crate::loads`].
#[derive(Default)]
pub struct Registry {
    entries: RwLock<Vec<Entry>>,
}

impl Registry {
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register<T>(&self)
    where
        T: DictConvertible + Default,
    {
        self.register_named::<T>(type_name::<T>())
    }

    pub fn register_named<T>(&self, identifier: impl ToString)
    where
        T: DictConvertible + Default,
    {
        let identifier = identifier.to_string();
        let type_id = TypeId::of::<T>();
        let mut entries = self.write();
        let mut loader = None;
        if let Some(index) = entries.iter().position(|e| e.type_id == Some(type_id)) {
            loader = entries.remove(index).loader;
        }
        if let Some(index) = entries.iter().position(|e| e.identifier == identifier) {
            let entry = entries.remove(index);
            if entry.type_id.is_some() {
                log::warn!(
                    "type identifier `{}` moves to type {}",
                    identifier,
                    type_name::<T>()
                );
            }
            if loader.is_none() && entry.type_id.is_none() {
                loader = entry.loader;
            }
        }
        log::debug!(
            "registered type {} as `{}`",
            type_name::<T>(),
            identifier
        );
        entries.push(Entry {
            identifier,
            type_id: Some(type_id),
            construct: Some(construct::<T>),
            loader,
        });
    }

    /// Loader takes precedence over default construction for `T`.
    pub fn register_custom_loader<T, F>(&self, loader: F)
    where
        T: DictConvertible,
        F: Fn(Dict) -> std::result::Result<Data, BoxError> + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<T>();
        let mut entries = self.write();
        if let Some(entry) = entries.iter_mut().find(|e| e.type_id == Some(type_id)) {
            entry.loader = Some(Arc::new(loader));
            log::debug!("registered custom loader for `{}`", entry.identifier);
            return;
        }
        let identifier = type_name::<T>();
        log::debug!("registered custom loader for type {}", identifier);
        if let Some(index) = entries.iter().position(|e| e.identifier == identifier) {
            if entries[index].type_id.is_none() {
                let entry = &mut entries[index];
                entry.type_id = Some(type_id);
                entry.loader = Some(Arc::new(loader));
                return;
            }
            log::warn!("type identifier `{}` moves to its own type", identifier);
            entries.remove(index);
        }
        entries.push(Entry {
            identifier: identifier.to_owned(),
            type_id: Some(type_id),
            construct: None,
            loader: Some(Arc::new(loader)),
        });
    }

    pub fn register_custom_loader_named<F>(&self, identifier: impl ToString, loader: F)
    where
        F: Fn(Dict) -> std::result::Result<Data, BoxError> + Send + Sync + 'static,
    {
        let identifier = identifier.to_string();
        log::debug!("registered custom loader for `{}`", identifier);
        let mut entries = self.write();
        if let Some(entry) = entries.iter_mut().find(|e| e.identifier == identifier) {
            entry.loader = Some(Arc::new(loader));
        } else {
            entries.push(Entry {
                identifier,
                type_id: None,
                construct: None,
                loader: Some(Arc::new(loader)),
            });
        }
    }

    pub fn unregister<T>(&self)
    where
        T: DictConvertible,
    {
        let type_id = TypeId::of::<T>();
        self.write().retain(|e| e.type_id != Some(type_id));
    }

    pub fn unregister_named(&self, identifier: &str) {
        self.write().retain(|e| e.identifier != identifier);
    }

    pub fn unregister_all(&self) {
        self.write().clear();
    }

    pub fn is_registered<T>(&self) -> bool
    where
        T: DictConvertible,
    {
        let type_id = TypeId::of::<T>();
        self.read().iter().any(|e| e.type_id == Some(type_id))
    }

    pub fn registered_identifier<T>(&self) -> Option<String>
    where
        T: DictConvertible,
    {
        let type_id = TypeId::of::<T>();
        self.read()
            .iter()
            .find(|e| e.type_id == Some(type_id))
            .map(|e| e.identifier.to_owned())
    }

    /// Identifier written into the `__classname__` tag of `object`.
    pub fn identifier_for(&self, object: &dyn DictConvertible) -> String {
        let type_id = object.as_any().type_id();
        self.read()
            .iter()
            .find(|e| e.type_id == Some(type_id))
            .map(|e| e.identifier.to_owned())
            .unwrap_or_else(|| object.type_name().to_owned())
    }

    pub fn resolve(&self, identifier: &str) -> Result<Resolution> {
        let entries = self.read();
        let entry = entries
            .iter()
            .find(|e| e.identifier == identifier)
            .ok_or_else(|| Error::UnresolvedType(identifier.to_owned()))?;
        if let Some(loader) = &entry.loader {
            return Ok(Resolution::Loader(loader.clone()));
        }
        entry
            .construct
            .map(Resolution::Construct)
            .ok_or_else(|| Error::UnresolvedType(identifier.to_owned()))
    }
}
