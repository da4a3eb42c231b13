use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let sqlbulk = &self.sqlbulk;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let load_body = self.expand_load_body();
        let record_body = self.expand_record_body();

        quote! {
            impl #sqlbulk::Model for #model_ident {
                #model_schema

                fn load(mut record: #sqlbulk::ValueRecord) -> #sqlbulk::Result<Self> {
                    #load_body
                }

                fn record(&self) -> #sqlbulk::Result<#sqlbulk::ValueRecord> {
                    #record_body
                }
            }
        }
    }

    fn expand_load_body(&self) -> TokenStream {
        let sqlbulk = &self.sqlbulk;
        let model_name = self.model.ident.to_string();
        let num_fields = util::int(self.model.mapped_fields().count());

        let mut fields = vec![];
        let mut index = 0;

        for field in &self.model.fields {
            let name = &field.ident;
            let ty = &field.ty;

            if field.is_mapped() {
                let index_tokenized = util::int(index);
                index += 1;
                fields.push(quote!(#name: <#ty as #sqlbulk::Primitive>::load(record[#index_tokenized].take())?,));
            } else {
                fields.push(quote!(#name: #sqlbulk::Default::default(),));
            }
        }

        quote! {
            if record.len() != #num_fields {
                return Err(#sqlbulk::Error::invalid_result(format!(
                    "expected {} columns for {}, got {}",
                    #num_fields,
                    #model_name,
                    record.len(),
                )));
            }

            Ok(Self {
                #( #fields )*
            })
        }
    }

    fn expand_record_body(&self) -> TokenStream {
        let sqlbulk = &self.sqlbulk;

        let values = self.model.mapped_fields().map(|field| {
            let name = &field.ident;
            let ty = &field.ty;
            quote!(<#ty as #sqlbulk::Primitive>::to_value(&self.#name)?)
        });

        quote! {
            Ok(#sqlbulk::ValueRecord::from_vec(vec![ #( #values, )* ]))
        }
    }
}
