use super::connection_type::ConnectionType;

/// Ordered set of connection types offered by the backend.
///
/// Loaded once per dialog-open cycle. The empty catalog means "not loaded yet".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    types: Vec<ConnectionType>,
}

impl TypeCatalog {
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new(types: Vec<ConnectionType>) -> Self {
        let mut deduped: Vec<ConnectionType> = Vec::with_capacity(types.len());
        for ty in types {
            if !deduped.contains(&ty) {
                deduped.push(ty);
            }
        }
        Self { types: deduped }
    }

    /// Default selection for a fresh draft.
    pub fn first(&self) -> Option<&ConnectionType> {
        self.types.first()
    }

    pub fn contains(&self, ty: &ConnectionType) -> bool {
        self.types.contains(ty)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConnectionType> {
        self.types.iter()
    }
}

impl FromIterator<ConnectionType> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = ConnectionType>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
