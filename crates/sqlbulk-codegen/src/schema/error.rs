/// Accumulates the errors found while parsing a derive input.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    combined: Option<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.combined {
            Some(combined) => combined.combine(err),
            None => self.combined = Some(err),
        }
    }

    /// Returns `value` if no error was pushed.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.combined {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
