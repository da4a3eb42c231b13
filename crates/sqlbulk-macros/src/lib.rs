extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(Model, attributes(key, computed, column, skip, table))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match sqlbulk_codegen::generate_model(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(SqlEnum)]
pub fn derive_sql_enum(input: TokenStream) -> TokenStream {
    match sqlbulk_codegen::generate_enum(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
