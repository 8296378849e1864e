// ============================================================================
// enum_attr Library
// ============================================================================

pub mod core;
pub mod meta;
pub mod model;
pub mod persist;

// Re-export main types for convenience
pub use core::{EnumAttrError, EnumValue, Result};
pub use meta::{DeclarationKind, EnumAttrDescriptor, EnumEntryDescriptor};
pub use model::EnumAttrModel;
pub use persist::{
    EnumStore, MemoryStore, StoredEntity, StoredState, load_with_defaults, new_entity_id,
    require_with_defaults, save_entity,
};

/// Generates an enum-attribute surface for annotated struct fields.
///
/// A field declared as `Option<T>` and annotated with `#[enum_attr(...)]`
/// gets, at compile time:
///
/// - an `AVAILABLE_*` constant and an `available_*` instance method exposing
///   the declared value set in declaration order,
/// - a getter and an unvalidated setter (`set_*`),
/// - for mapping declarations (`values(name = value, ...)`), one `is_<name>`
///   predicate and one `set_<name>` mutator per entry,
/// - `set_default_*` plus an [`EnumAttrModel`] impl, when a default is
///   configured,
/// - async `*_persisted` write-through variants, when the declaration carries
///   the `persisted` flag (the type must then implement [`StoredEntity`]).
///
/// # Examples
///
/// ```
/// use enum_attr::{EnumAttr, EnumAttrModel};
///
/// #[derive(EnumAttr, Default)]
/// struct Package {
///     #[enum_attr(values(out_of_stock = -1, ready = 0, selling = 1), default = ready)]
///     status: Option<i64>,
/// }
///
/// let mut package = Package::default().with_enum_defaults();
/// assert_eq!(package.status(), Some(&0));
/// assert!(package.is_ready());
///
/// package.set_out_of_stock();
/// assert_eq!(package.status(), Some(&-1));
/// assert!(!package.is_ready());
///
/// assert_eq!(
///     Package::AVAILABLE_STATUSES,
///     &[("out_of_stock", -1), ("ready", 0), ("selling", 1)],
/// );
/// ```
///
/// List declarations (`values(v1, v2, ...)`) generate the getter, setter and
/// availability surface only:
///
/// ```
/// use enum_attr::EnumAttr;
///
/// #[derive(EnumAttr, Default)]
/// struct Reading {
///     #[enum_attr(values(1, 0))]
///     sex: Option<i64>,
/// }
///
/// let mut reading = Reading::default();
/// assert_eq!(reading.sex(), None);
/// reading.set_sex(1);
/// assert_eq!(reading.sex(), Some(&1));
/// assert_eq!(Reading::AVAILABLE_SEXES, &[1, 0]);
/// ```
pub use enum_attr_derive::EnumAttr;
