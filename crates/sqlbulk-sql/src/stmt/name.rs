use std::fmt;

/// A possibly schema-qualified object name, split on `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    /// Joins the parts without separators, as used in derived object names.
    pub fn flattened(&self) -> String {
        self.0.concat()
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(value.split('.').map(String::from).collect())
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
