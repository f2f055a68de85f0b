//! Derive macro for `censor`.
//!
//! This crate generates the field enumeration behind `#[derive(Censor)]`. It:
//! - reads `#[censor(...)]` field and container attributes
//! - emits `censor::Record` and `censor::Censorable` implementations
//!
//! It does **not** decide what gets censored. Rules live in the main `censor`
//! crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod attrs;
mod container;
mod derive_enum;
mod derive_struct;
mod fields;
mod generics;
mod types;
use container::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use fields::DeriveOutput;
use generics::add_censorable_bounds;

/// Derives `censor::Record` and `censor::Censorable` for structs and enums.
///
/// Every field is traversed by default, under its own name. Field types must
/// implement `censor::Censorable`: std scalars, `String`, `Option`, `Vec`,
/// `Box`, string-keyed maps, `censor::Value` and other types deriving `Censor`.
///
/// # Field Attributes
///
/// - `#[censor(skip)]`: hide the field from traversal. Use this for types that
///   don't implement `Censorable`, like `std::time::SystemTime`.
/// - `#[censor(rename = "name")]`: use `name` as the field's path segment.
///
/// `PhantomData` fields are skipped automatically. Tuple fields are named by
/// position (`"0"`, `"1"`, ...). For enums, the active variant's fields are
/// enumerated and the variant name is not part of the path.
///
/// # Container Attributes
///
/// - `#[censor(crate = "path::to::censor")]`: path to the `censor` crate when
///   it is re-exported from another crate.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(Censor, attributes(censor))]
pub fn derive_censor(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the censor crate root.
///
/// Handles crate renaming (e.g., `my_censor = { package = "censor", ... }`).
/// Inside the censor crate itself `::censor` resolves through its
/// `extern crate self as censor` alias.
fn crate_root(options: &ContainerOptions) -> TokenStream {
    if let Some(path) = &options.crate_path {
        return quote! { #path };
    }
    match crate_name("censor") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::censor },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let options = parse_container_options(&attrs)?;
    let root = crate_root(&options);

    let DeriveOutput {
        fields_body,
        bounded_types,
    } = match data {
        Data::Struct(data) => derive_struct(data, &generics, &root)?,
        Data::Enum(data) => derive_enum(data, &generics, &root)?,
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`Censor` cannot be derived for unions",
            ));
        }
    };

    let generics = add_censorable_bounds(generics, &bounded_types, &root);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #root::Record for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<#root::Field<'_>> {
                #fields_body
            }
        }

        impl #impl_generics #root::Censorable for #ident #ty_generics #where_clause {
            fn shape(&mut self) -> #root::Shape<'_> {
                #root::Shape::Record(self)
            }
        }
    })
}
