mod model;
mod schema;
mod sql_enum;
mod util;

use crate::schema::{Model, SqlEnum};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for sqlbulk types
    sqlbulk: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impls = self.expand_model_impls();

        wrap_in_const(quote! {
            #model_impls
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        sqlbulk: quote!(_sqlbulk::codegen_support),
    }
    .expand()
}

pub(super) fn sql_enum(sql_enum: &SqlEnum) -> TokenStream {
    wrap_in_const(sql_enum::expand(sql_enum, &quote!(_sqlbulk::codegen_support)))
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sqlbulk as _sqlbulk;
            #code
        };
    }
}
