use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let sqlbulk = &self.sqlbulk;
        let name = self.model.ident.to_string();
        let fields = self.expand_model_fields();
        let table_name = match &self.model.table {
            Some(table) => quote!(Some(#table.to_string())),
            None => quote!(None),
        };

        quote! {
            fn schema() -> #sqlbulk::schema::Model {
                use #sqlbulk::schema::{Field, FieldName};

                #sqlbulk::schema::Model {
                    name: #name.to_string(),
                    table_name: #table_name,
                    fields: #fields,
                }
            }
        }
    }

    fn expand_model_fields(&self) -> TokenStream {
        let sqlbulk = &self.sqlbulk;

        let fields = self.model.mapped_fields().map(|field| {
            let ty = &field.ty;
            let app_name = field.ident.to_string();
            let storage_name = match &field.attrs.column {
                Some(column) => {
                    let name = &column.name;
                    quote!(Some(#name.to_string()))
                }
                None => quote!(None),
            };
            let primary_key = field.attrs.key;
            let computed = field.attrs.computed;

            quote! {
                Field {
                    name: FieldName {
                        app_name: #app_name.to_string(),
                        storage_name: #storage_name,
                    },
                    ty: <#ty as #sqlbulk::Primitive>::TYPE,
                    nullable: <#ty as #sqlbulk::Primitive>::NULLABLE,
                    primary_key: #primary_key,
                    computed: #computed,
                }
            }
        });

        quote!(vec![ #( #fields, )* ])
    }
}
