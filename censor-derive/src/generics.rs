//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added per field type rather than per type parameter: a field
//! `Vec<T>` requires `Vec<T>: Censorable`, which is stricter than
//! `T: Censorable` and is the bound the generated code actually relies on.
//! Fields whose types do not mention any type parameter need no bound.

use proc_macro2::TokenStream;
use syn::parse_quote;

/// Returns `true` if `ty` mentions one of the type parameters in `generics`.
pub(crate) fn uses_type_params(ty: &syn::Type, generics: &syn::Generics) -> bool {
    match ty {
        syn::Type::Path(path) => {
            if let Some(qself) = &path.qself {
                if uses_type_params(&qself.ty, generics) {
                    return true;
                }
            }
            if path.path.leading_colon.is_none() {
                if let Some(first) = path.path.segments.first() {
                    if generics.type_params().any(|param| first.ident == param.ident) {
                        return true;
                    }
                }
            }
            path.path.segments.iter().any(|segment| match &segment.arguments {
                syn::PathArguments::AngleBracketed(args) => args.args.iter().any(|arg| match arg {
                    syn::GenericArgument::Type(inner) => uses_type_params(inner, generics),
                    _ => false,
                }),
                _ => false,
            })
        }
        syn::Type::Reference(reference) => uses_type_params(&reference.elem, generics),
        syn::Type::Array(array) => uses_type_params(&array.elem, generics),
        syn::Type::Slice(slice) => uses_type_params(&slice.elem, generics),
        syn::Type::Tuple(tuple) => tuple.elems.iter().any(|elem| uses_type_params(elem, generics)),
        syn::Type::Group(group) => uses_type_params(&group.elem, generics),
        syn::Type::Paren(paren) => uses_type_params(&paren.elem, generics),
        _ => false,
    }
}

/// Adds `FieldTy: Censorable` predicates for every collected field type.
pub(crate) fn add_censorable_bounds(
    mut generics: syn::Generics,
    field_types: &[syn::Type],
    root: &TokenStream,
) -> syn::Generics {
    if field_types.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for ty in field_types {
        where_clause
            .predicates
            .push(parse_quote!(#ty: #root::Censorable));
    }
    generics
}
