//! `#[censor(crate = "...")]` on the deriving type.

use syn::{Attribute, LitStr, Path, Result};

#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// Overrides the `Cargo.toml` lookup of the `censor` crate.
    pub(crate) crate_path: Option<Path>,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("censor")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("crate") {
                return Err(meta.error("only `crate = \"...\"` is accepted on the type"));
            }
            if options.crate_path.is_some() {
                return Err(meta.error("duplicate `crate` option"));
            }
            let path: LitStr = meta.value()?.parse()?;
            options.crate_path = Some(path.parse()?);
            Ok(())
        })?;
    }
    Ok(options)
}
