//! Parsing of `#[censor(...)]` field attributes.
//!
//! This module maps attribute syntax to traversal decisions and produces
//! structured errors for invalid forms.

use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// Per-field options.
///
/// | Attribute | Behavior |
/// |-----------|----------|
/// | None | Field is traversed under its own name |
/// | `#[censor(skip)]` | Field is hidden from traversal |
/// | `#[censor(rename = "name")]` | Field is traversed under `name` |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) skip: bool,
    pub(crate) rename: Option<LitStr>,
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in attrs {
        if !attr.path().is_ident("censor") {
            continue;
        }

        match &attr.meta {
            Meta::List(list) => {
                list.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        if options.skip {
                            return Err(meta.error("duplicate `skip` option"));
                        }
                        options.skip = true;
                        Ok(())
                    } else if meta.path.is_ident("rename") {
                        if options.rename.is_some() {
                            return Err(meta.error("duplicate `rename` option"));
                        }
                        let name: LitStr = meta.value()?.parse()?;
                        if name.value().is_empty() {
                            return Err(syn::Error::new(name.span(), "`rename` must not be empty"));
                        }
                        options.rename = Some(name);
                        Ok(())
                    } else {
                        Err(meta.error(format!(
                            "unknown field option `{}`; expected `skip` or `rename`",
                            meta.path
                                .get_ident()
                                .map_or_else(|| "?".to_string(), ToString::to_string)
                        )))
                    }
                })?;
            }
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected `#[censor(skip)]` or `#[censor(rename = \"...\")]`",
                ));
            }
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "name-value syntax is not supported for #[censor]",
                ));
            }
        }
    }

    if options.skip {
        if let Some(name) = &options.rename {
            return Err(syn::Error::new(
                name.span(),
                "`skip` and `rename` cannot be combined",
            ));
        }
    }

    Ok(options)
}
