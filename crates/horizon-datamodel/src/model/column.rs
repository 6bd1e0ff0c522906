//! Column descriptors.
//!
//! A [`DataColumn<T>`] declares one typed slot of a store's rows. It is
//! created unbound, handed to [`ListStore::new`](super::ListStore::new), and
//! from then on carries the ordinal the store assigned. The caller keeps the
//! descriptor to read and write cells with compile-time typing.
//!
//! ```
//! use horizon_datamodel::model::{DataColumnBoolean, DataColumnInteger, DataColumnString, ListStore};
//!
//! let name = DataColumnString::new();
//! let age = DataColumnInteger::new();
//! let useful = DataColumnBoolean::new();
//! assert!(name.ordinal().is_err());
//!
//! let _model = ListStore::new(&[&name, &age, &useful]).unwrap();
//! assert_eq!(age.ordinal().unwrap(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use horizon_datamodel_core::logging::targets;

use super::iter::StoreId;
use super::pixbuf::Pixbuf;
use super::reference::Reference;
use super::value::{ColumnType, ColumnValue};
use crate::error::{ModelError, Result};

#[derive(Debug, Clone, Copy)]
struct Binding {
    store: StoreId,
    ordinal: usize,
}

#[derive(Debug)]
struct ColumnSlot {
    column_type: ColumnType,
    binding: Mutex<Option<Binding>>,
}

impl ColumnSlot {
    fn binding(&self) -> Option<Binding> {
        *self.binding.lock()
    }
}

/// Untyped identity of a column descriptor.
///
/// Clones refer to the same descriptor; equality is identity. Once a store
/// has been built from a descriptor, its ordinal never changes.
#[derive(Clone)]
pub struct ColumnDescriptor {
    slot: Arc<ColumnSlot>,
}

impl ColumnDescriptor {
    /// Creates an unbound descriptor for `column_type`.
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            slot: Arc::new(ColumnSlot {
                column_type,
                binding: Mutex::new(None),
            }),
        }
    }

    /// Returns the declared type tag.
    pub fn column_type(&self) -> ColumnType {
        self.slot.column_type
    }

    /// Returns the ordinal assigned by the owning store.
    ///
    /// Fails with [`ModelError::ColumnNotBound`] until a store is built from
    /// this descriptor.
    pub fn ordinal(&self) -> Result<usize> {
        self.slot
            .binding()
            .map(|binding| binding.ordinal)
            .ok_or(ModelError::ColumnNotBound)
    }

    /// Returns `true` once a store has claimed this descriptor.
    pub fn is_bound(&self) -> bool {
        self.slot.binding().is_some()
    }

    /// Returns the id of the owning store, if bound.
    pub fn store_id(&self) -> Option<StoreId> {
        self.slot.binding().map(|binding| binding.store)
    }

    /// Returns `true` if both values refer to the same descriptor.
    pub fn same_descriptor(&self, other: &ColumnDescriptor) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }

    /// Resolves the ordinal for use against `store`.
    pub(crate) fn ordinal_in(&self, store: StoreId) -> Result<usize> {
        let binding = self.slot.binding().ok_or(ModelError::ColumnNotBound)?;
        if binding.store != store {
            return Err(ModelError::ForeignColumn);
        }
        Ok(binding.ordinal)
    }

    /// Claims the descriptor for `store`. Returns `false` if it was already bound.
    pub(crate) fn bind(&self, store: StoreId, ordinal: usize) -> bool {
        {
            let mut binding = self.slot.binding.lock();
            if binding.is_some() {
                return false;
            }
            *binding = Some(Binding { store, ordinal });
        }
        tracing::trace!(
            target: targets::COLUMN,
            ?store,
            ordinal,
            column_type = %self.column_type(),
            "bound column"
        );
        true
    }

    /// Releases a claim made by `store` during a construction that failed.
    pub(crate) fn unbind(&self, store: StoreId) {
        let mut binding = self.slot.binding.lock();
        if binding.is_some_and(|b| b.store == store) {
            *binding = None;
        }
    }
}

impl PartialEq for ColumnDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.same_descriptor(other)
    }
}

impl Eq for ColumnDescriptor {}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ColumnDescriptor");
        s.field("type", &self.column_type());
        match self.slot.binding() {
            Some(binding) => s
                .field("store", &binding.store)
                .field("ordinal", &binding.ordinal),
            None => s.field("ordinal", &"unbound"),
        };
        s.finish()
    }
}

/// Anything that can be passed to a store constructor as a column.
///
/// Implemented by every [`DataColumn<T>`] and by [`ColumnDescriptor`], so a
/// heterogeneous schema can be written as `&[&name, &age, &useful]`.
pub trait Column: Send + Sync {
    /// Returns the untyped descriptor.
    fn descriptor(&self) -> &ColumnDescriptor;

    /// Returns the declared type tag.
    fn column_type(&self) -> ColumnType {
        self.descriptor().column_type()
    }

    /// Returns the ordinal assigned by the owning store.
    fn ordinal(&self) -> Result<usize> {
        self.descriptor().ordinal()
    }
}

impl Column for ColumnDescriptor {
    fn descriptor(&self) -> &ColumnDescriptor {
        self
    }
}

/// A typed column descriptor.
///
/// `T` fixes both the declared [`ColumnType`] and the Rust type accepted by
/// [`ListStore::set_value`](super::ListStore::set_value).
pub struct DataColumn<T> {
    descriptor: ColumnDescriptor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ColumnValue> DataColumn<T> {
    /// Creates an unbound column.
    pub fn new() -> Self {
        Self {
            descriptor: ColumnDescriptor::new(T::TYPE),
            _marker: PhantomData,
        }
    }

    /// Returns the declared type tag. Available before binding.
    pub fn column_type(&self) -> ColumnType {
        T::TYPE
    }

    /// Returns the ordinal assigned by the owning store.
    ///
    /// Fails with [`ModelError::ColumnNotBound`] before binding.
    pub fn ordinal(&self) -> Result<usize> {
        self.descriptor.ordinal()
    }

    /// Returns `true` once a store has claimed this column.
    pub fn is_bound(&self) -> bool {
        self.descriptor.is_bound()
    }

    /// Returns the id of the owning store, if bound.
    pub fn store_id(&self) -> Option<StoreId> {
        self.descriptor.store_id()
    }
}

impl<T: ColumnValue> Default for DataColumn<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DataColumn<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for DataColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.descriptor.fmt(f)
    }
}

impl<T: ColumnValue> Column for DataColumn<T> {
    fn descriptor(&self) -> &ColumnDescriptor {
        &self.descriptor
    }
}

/// A column of text.
pub type DataColumnString = DataColumn<String>;
/// A column of 32-bit integers.
pub type DataColumnInteger = DataColumn<i32>;
/// A column of booleans.
pub type DataColumnBoolean = DataColumn<bool>;
/// A column of shared object references.
pub type DataColumnReference = DataColumn<Reference>;
/// A column of shared image buffers.
pub type DataColumnPixbuf = DataColumn<Pixbuf>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_ordinal_is_illegal_state() {
        let column = DataColumnString::new();
        let err = column.ordinal().unwrap_err();
        assert_eq!(err, ModelError::ColumnNotBound);
        assert!(err.is_illegal_state());
        assert!(!column.is_bound());
    }

    #[test]
    fn test_type_known_before_binding() {
        assert_eq!(DataColumnString::new().column_type(), ColumnType::String);
        assert_eq!(DataColumnInteger::new().column_type(), ColumnType::Integer);
        assert_eq!(DataColumnBoolean::new().column_type(), ColumnType::Boolean);
        assert_eq!(DataColumnReference::new().column_type(), ColumnType::Reference);
        assert_eq!(DataColumnPixbuf::new().column_type(), ColumnType::Pixbuf);
    }

    #[test]
    fn test_bind_is_write_once() {
        let column = DataColumnInteger::new();
        let first = StoreId::next();
        let second = StoreId::next();

        assert!(column.descriptor().bind(first, 3));
        assert!(!column.descriptor().bind(second, 0));

        assert_eq!(column.ordinal(), Ok(3));
        assert_eq!(column.descriptor().store_id(), Some(first));
        assert_eq!(column.descriptor().ordinal_in(second), Err(ModelError::ForeignColumn));
    }

    #[test]
    fn test_unbind_only_releases_own_claim() {
        let column = DataColumnInteger::new();
        let owner = StoreId::next();
        column.descriptor().bind(owner, 1);

        column.descriptor().unbind(StoreId::next());
        assert_eq!(column.descriptor().store_id(), Some(owner));

        column.descriptor().unbind(owner);
        assert!(!column.is_bound());
        assert!(column.descriptor().bind(StoreId::next(), 0));
    }

    #[test]
    fn test_clones_share_identity() {
        let column = DataColumnBoolean::new();
        let copy = column.clone();
        assert_eq!(column.descriptor(), copy.descriptor());
        assert_ne!(column.descriptor(), DataColumnBoolean::new().descriptor());

        column.descriptor().bind(StoreId::next(), 0);
        assert!(copy.is_bound());
    }
}
