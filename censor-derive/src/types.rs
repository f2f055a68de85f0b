//! Type utilities for the derive macro.

/// Checks if a type is `PhantomData<..>` (bare or path-qualified).
///
/// Marker fields hold no data and are never traversed.
pub(crate) fn is_phantom_data(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "PhantomData"),
        syn::Type::Group(group) => is_phantom_data(&group.elem),
        syn::Type::Paren(paren) => is_phantom_data(&paren.elem),
        _ => false,
    }
}
