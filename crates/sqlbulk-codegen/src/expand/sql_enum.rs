use crate::schema::SqlEnum;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(sql_enum: &SqlEnum, sqlbulk: &TokenStream) -> TokenStream {
    let ident = &sql_enum.ident;
    let repr = &sql_enum.repr;
    let name = ident.to_string();

    let discriminant_matches = sql_enum.variants.iter().map(|variant| {
        quote! {
            if discriminant == #ident::#variant as #repr {
                return Ok(#ident::#variant);
            }
        }
    });

    let to_discriminant = sql_enum.variants.iter().map(|variant| {
        quote!(#ident::#variant => #ident::#variant as #repr,)
    });

    quote! {
        impl #sqlbulk::Primitive for #ident {
            const TYPE: #sqlbulk::Type = <#repr as #sqlbulk::Primitive>::TYPE;

            fn load(value: #sqlbulk::Value) -> #sqlbulk::Result<Self> {
                let discriminant = <#repr as #sqlbulk::Primitive>::load(value)?;
                #( #discriminant_matches )*
                Err(#sqlbulk::Error::from_args(format_args!(
                    "no variant of {} has discriminant {}",
                    #name,
                    discriminant,
                )))
            }

            fn to_value(&self) -> #sqlbulk::Result<#sqlbulk::Value> {
                let discriminant = match self {
                    #( #to_discriminant )*
                };
                <#repr as #sqlbulk::Primitive>::to_value(&discriminant)
            }
        }
    }
}
