use std::fmt;


/// The unit of indexing and matching: a field name paired with a single
/// normalized token of text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    pub field: String,
    pub text: String,
}


impl Term {
    pub fn new(field: &str, text: &str) -> Term {
        Term {
            field: field.to_string(),
            text: text.to_string(),
        }
    }
}


impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.text)
    }
}
