//! Struct-specific `Record` derivation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Fields, Result};

use crate::fields::{collect_fields, DeriveContext, DeriveOutput};

pub(crate) fn derive_struct(
    data: DataStruct,
    generics: &syn::Generics,
    root: &TokenStream,
) -> Result<DeriveOutput> {
    let mut bounded_types = Vec::new();
    let mut ctx = DeriveContext {
        generics,
        root,
        bounded_types: &mut bounded_types,
    };

    let fields_body = match &data.fields {
        Fields::Named(_) | Fields::Unnamed(_) => {
            let set = collect_fields(&mut ctx, &data.fields)?;
            let pattern = set.pattern(&quote! { Self });
            let entries = set.entries();
            quote! {
                let #pattern = self;
                #entries
            }
        }
        Fields::Unit => quote! { ::std::vec::Vec::new() },
    };

    Ok(DeriveOutput {
        fields_body,
        bounded_types,
    })
}
