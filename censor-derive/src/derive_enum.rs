//! Enum-specific `Record` derivation.
//!
//! Each variant's fields are exposed under their own names; the variant name
//! is not part of the path.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Result};

use crate::fields::{collect_fields, DeriveContext, DeriveOutput};

pub(crate) fn derive_enum(
    data: DataEnum,
    generics: &syn::Generics,
    root: &TokenStream,
) -> Result<DeriveOutput> {
    let mut bounded_types = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        root,
        bounded_types: &mut bounded_types,
    };

    let mut arms = Vec::new();
    for variant in data.variants {
        let variant_ident = &variant.ident;
        let arm = match &variant.fields {
            Fields::Unit => quote! {
                Self::#variant_ident => ::std::vec::Vec::new()
            },
            fields => {
                let set = collect_fields(&mut ctx, fields)?;
                let pattern = set.pattern(&quote! { Self::#variant_ident });
                let entries = set.entries();
                quote! { #pattern => #entries }
            }
        };
        arms.push(arm);
    }

    let fields_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms),*
            }
        }
    };

    Ok(DeriveOutput {
        fields_body,
        bounded_types,
    })
}
