use crate::meta::EnumAttrDescriptor;

/// Implemented by `#[derive(EnumAttr)]` for every model with declared enum
/// attributes.
///
/// Default application is explicit composition, not constructor interception:
/// build the value however you like, then apply defaults on top. A default is
/// only applied while its field is still unset, so values coming from a
/// caller-supplied constructor or a store load are never clobbered.
pub trait EnumAttrModel {
    /// Applies the configured default of every declared field that is still
    /// unset. Idempotent.
    fn apply_enum_defaults(&mut self);

    /// Describes the declared enum attributes of this type.
    fn enum_attr_descriptors() -> Vec<EnumAttrDescriptor>
    where
        Self: Sized;

    /// Consuming variant of [`apply_enum_defaults`](Self::apply_enum_defaults),
    /// meant to terminate a construction expression.
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
    /// let package = Package::default().with_enum_defaults();
    /// assert_eq!(package.status(), Some(&0));
    /// assert!(package.is_ready());
    /// ```
    fn with_enum_defaults(mut self) -> Self
    where
        Self: Sized,
    {
        self.apply_enum_defaults();
        self
    }
}
