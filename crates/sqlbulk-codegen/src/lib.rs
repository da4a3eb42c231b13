mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Model)]`.
pub fn generate_model(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let model = schema::Model::from_ast(&item)?;

    Ok(expand::model(&model))
}

/// Expands `#[derive(SqlEnum)]`.
pub fn generate_enum(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemEnum = syn::parse2(input)?;
    let sql_enum = schema::SqlEnum::from_ast(&item)?;

    Ok(expand::sql_enum(&sql_enum))
}
