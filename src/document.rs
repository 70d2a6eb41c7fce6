use std::collections::HashMap;

use token::Token;
use analysis::AnalyzerSpec;


/// A document to be matched against the registered queries.
///
/// All content is analyzed eagerly, so by the time a document reaches the
/// presearcher it is fully materialized in memory and no I/O or analysis
/// failure can occur mid-match.
#[derive(Debug)]
pub struct InputDocument {
    pub key: String,
    pub fields: HashMap<String, Vec<Token>>,
}


impl InputDocument {
    pub fn new(key: &str) -> InputDocument {
        InputDocument {
            key: key.to_string(),
            fields: HashMap::new(),
        }
    }

    /// Analyzes a field's raw text and adds the resulting tokens.
    ///
    /// Adding the same field twice appends to its token list.
    pub fn add_field(&mut self, name: &str, value: &str, analyzer: &AnalyzerSpec) {
        let tokens = analyzer.initialise(value).collect::<Vec<Token>>();
        self.add_field_tokens(name, tokens);
    }

    /// Adds a field from pre-analyzed tokens.
    pub fn add_field_tokens(&mut self, name: &str, tokens: Vec<Token>) {
        self.fields.entry(name.to_string())
                   .or_insert_with(Vec::new)
                   .extend(tokens);
    }
}
