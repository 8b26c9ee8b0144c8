//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two amounts of
/// `MinorUnits(1999)` are the same price; a style descriptor for the sale badge
/// is the same record wherever it is selected.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct TagStyle {
///     text: &'static str,
/// }
///
/// impl ValueObject for TagStyle {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
