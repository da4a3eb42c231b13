#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        // Allowed syntax:
        //
        // #[column("name")]
        // #[column(name = "name")]
        let lookahead = input.lookahead1();

        let name: syn::LitStr = if lookahead.peek(syn::LitStr) {
            input.parse()?
        } else if lookahead.peek(kw::name) {
            let _kw: kw::name = input.parse()?;
            let _eq_token: syn::Token![=] = input.parse()?;
            input.parse()?
        } else {
            return Err(lookahead.error());
        };

        if name.value().is_empty() {
            return Err(syn::Error::new_spanned(&name, "column name must not be empty"));
        }

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after column name"));
        }

        Ok(Column { name })
    }
}

mod kw {
    syn::custom_keyword!(name);
}
