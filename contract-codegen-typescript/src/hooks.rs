//! Customization hook consulted before default conversion.

use contractgen_model::TypeDescriptor;

use crate::ast::TsType;

/// Replaces the default conversion of selected types.
///
/// The walker asks the override first for every descriptor it converts
/// inline or references. Returning `None` keeps the default behavior.
///
/// ```
/// use contractgen_codegen_typescript::{TsType, TypeOverride};
/// use contractgen_model::{PrimitiveKind, TypeDescriptor};
///
/// struct DatesAsDate;
///
/// impl TypeOverride for DatesAsDate {
///     fn override_type(&self, descriptor: &TypeDescriptor) -> Option<TsType> {
///         match descriptor {
///             TypeDescriptor::Primitive(PrimitiveKind::Date) => {
///                 Some(TsType::constant("Date | string"))
///             }
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TypeOverride {
    fn override_type(&self, descriptor: &TypeDescriptor) -> Option<TsType>;
}

impl<F> TypeOverride for F
where
    F: Fn(&TypeDescriptor) -> Option<TsType>,
{
    fn override_type(&self, descriptor: &TypeDescriptor) -> Option<TsType> {
        self(descriptor)
    }
}
