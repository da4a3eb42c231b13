use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// True if the field is annotated with `#[key]`
    pub(crate) key: bool,

    /// True if the field is annotated with `#[computed]`
    pub(crate) computed: bool,

    /// True if the field is annotated with `#[skip]`
    pub(crate) skip: bool,

    /// Optional database column name
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = true;
                }
            } else if attr.path().is_ident("computed") {
                if attrs.computed {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[computed] attribute",
                    ));
                } else {
                    attrs.computed = true;
                }
            } else if attr.path().is_ident("skip") {
                if attrs.skip {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    attrs.skip = true;
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if attrs.skip && (attrs.key || attrs.computed || attrs.column.is_some()) {
            errs.push(syn::Error::new_spanned(
                ident,
                "#[skip] fields cannot also be #[key], #[computed] or #[column]",
            ));
        }

        errs.finish(())?;

        Ok(Field {
            attrs,
            ident: ident.clone(),
            ty: field.ty.clone(),
        })
    }

    /// Returns `true` if the field maps to a column.
    pub(crate) fn is_mapped(&self) -> bool {
        !self.attrs.skip
    }
}
