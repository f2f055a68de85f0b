//! Shared field enumeration for struct and enum derivation.
//!
//! Both derives bind the traversed fields of `Self` (or of a variant) by
//! mutable reference and turn each binding into a `Field` entry.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, Fields, Result};

use crate::{attrs::parse_field_options, generics::uses_type_params, types::is_phantom_data};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) root: &'a TokenStream,
    /// Field types that mention a type parameter and need a `Censorable` bound.
    pub(crate) bounded_types: &'a mut Vec<syn::Type>,
}

/// Output shared by the struct and enum derives.
pub(crate) struct DeriveOutput {
    pub(crate) fields_body: TokenStream,
    pub(crate) bounded_types: Vec<syn::Type>,
}

/// The pattern and `Field` entries for one set of fields.
pub(crate) struct FieldSet {
    named: bool,
    patterns: Vec<TokenStream>,
    entries: Vec<TokenStream>,
}

impl FieldSet {
    /// Destructuring pattern for `path` (e.g. `Self` or `Self::Variant`).
    pub(crate) fn pattern(&self, path: &TokenStream) -> TokenStream {
        let patterns = &self.patterns;
        if self.named {
            quote! { #path { #(#patterns,)* .. } }
        } else {
            quote! { #path ( #(#patterns),* ) }
        }
    }

    /// Expression building the `Vec<Field>` from the pattern's bindings.
    pub(crate) fn entries(&self) -> TokenStream {
        let entries = &self.entries;
        quote! { ::std::vec![#(#entries),*] }
    }
}

/// Collects the traversed fields of a named or tuple field list.
///
/// Tuple fields are named by position (`"0"`, `"1"`, ...). Skipped and
/// `PhantomData` fields are bound to nothing.
pub(crate) fn collect_fields(ctx: &mut DeriveContext<'_>, fields: &Fields) -> Result<FieldSet> {
    let named = matches!(fields, Fields::Named(_));
    let mut patterns = Vec::new();
    let mut entries = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let options = parse_field_options(&field.attrs)?;
        let traversed = !options.skip && !is_phantom_data(&field.ty);
        let binding = format_ident!("field_{index}");

        if !traversed {
            if !named {
                patterns.push(quote! { _ });
            }
            continue;
        }

        let name = match (&options.rename, &field.ident) {
            (Some(rename), _) => rename.value(),
            (None, Some(ident)) => ident.unraw().to_string(),
            (None, None) => index.to_string(),
        };

        match &field.ident {
            Some(ident) => patterns.push(quote! { #ident: #binding }),
            None => patterns.push(quote! { #binding }),
        }

        if uses_type_params(&field.ty, ctx.generics) {
            ctx.bounded_types.push(field.ty.clone());
        }

        entries.push(field_entry(ctx.root, &name, &binding, field.span()));
    }

    Ok(FieldSet {
        named,
        patterns,
        entries,
    })
}

fn field_entry(root: &TokenStream, name: &str, binding: &syn::Ident, span: Span) -> TokenStream {
    // Spanned so a field type that is not `Censorable` is reported on the field.
    quote_spanned! { span =>
        #root::Field::new(#name, #binding)
    }
}
