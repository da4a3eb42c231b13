use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, including skipped ones
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let attr = ModelAttr::from_ast(&ast.attrs)?;

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for field in node.named.iter() {
            match Field::from_ast(field) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        errs.finish(())?;

        if !fields.iter().any(Field::is_mapped) {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "model must have at least one field that is not #[skip]",
            ));
        }

        Ok(Model {
            ident: ast.ident.clone(),
            fields,
            table: attr.table,
        })
    }

    /// Fields that map to a column, in declaration order.
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_mapped())
    }
}
