/// A fieldless enum stored as its integer discriminant.
#[derive(Debug)]
pub(crate) struct SqlEnum {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Integer type from `#[repr(...)]`, `i32` when absent
    pub(crate) repr: syn::Ident,

    /// Variant identifiers
    pub(crate) variants: Vec<syn::Ident>,
}

const SUPPORTED_REPRS: &[&str] = &["u8", "i16", "i32", "i64"];

impl SqlEnum {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "enum generics are not supported",
            ));
        }

        if ast.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "enum must have at least one variant",
            ));
        }

        let mut repr = None;

        for attr in &ast.attrs {
            if !attr.path().is_ident("repr") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                let Some(ident) = meta.path.get_ident() else {
                    return Ok(());
                };

                if SUPPORTED_REPRS.contains(&ident.to_string().as_str()) {
                    repr = Some(ident.clone());
                    Ok(())
                } else if ident.to_string().starts_with(['i', 'u']) {
                    Err(meta.error(format!(
                        "unsupported repr `{ident}`; expected one of u8, i16, i32, i64"
                    )))
                } else {
                    Ok(())
                }
            })?;
        }

        let mut variants = vec![];

        for variant in &ast.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "only unit variants can be stored as an integer",
                ));
            }

            variants.push(variant.ident.clone());
        }

        Ok(SqlEnum {
            ident: ast.ident.clone(),
            repr: repr.unwrap_or_else(|| syn::Ident::new("i32", proc_macro2::Span::call_site())),
            variants,
        })
    }
}
