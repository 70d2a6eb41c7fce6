//! Candidate selection for stored queries
//!
//! A presearcher turns a registered query into a small indexable document
//! of extracted terms, and an incoming document into a disjunction over its
//! tokens used to pull candidate queries back out of the term index.
//! Retrieval is sound but not tight: a query that truly matches the
//! document is always retrieved, alongside false positives that the final
//! evaluation weeds out.

pub mod term_filtered;

use std::collections::HashMap;

use token::Token;
use query::Query;
use document::InputDocument;

pub use presearcher::term_filtered::TermFilteredPresearcher;


/// The indexable form of a registered query: one tokenizable text value
/// per field, holding every extracted term separated by spaces.
///
/// Built once at registration time and handed to the external term index,
/// keyed by the query's identity. Term order within a field carries no
/// meaning; only membership does.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryIndexDocument {
    fields: HashMap<String, String>,
}


impl QueryIndexDocument {
    pub fn new(fields: HashMap<String, String>) -> QueryIndexDocument {
        QueryIndexDocument {
            fields: fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|text| text.as_str())
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }
}


pub trait Presearcher {
    /// Converts a registered query into its indexable term-set document.
    fn index_query(&self, query: &Query) -> QueryIndexDocument;

    /// Converts an incoming document into the disjunction used to retrieve
    /// candidate queries from the term index.
    fn build_query(&self, document: &InputDocument) -> Query;
}


/// Narrows which of an input document's tokens participate in candidate
/// selection.
///
/// Applied at match time only; registration-time extraction always sees
/// the full vocabulary. The asymmetry is intentional: dropping a token
/// here can only lose candidates for documents, never corrupt what was
/// indexed for a query.
pub trait DocumentTokenFilter {
    fn filter<'a>(&self, field: &str, tokens: Box<Iterator<Item=Token> + 'a>) -> Box<Iterator<Item=Token> + 'a>;
}


/// The default filter: passes every token through unchanged.
pub struct PassThroughFilter;


impl DocumentTokenFilter for PassThroughFilter {
    fn filter<'a>(&self, _field: &str, tokens: Box<Iterator<Item=Token> + 'a>) -> Box<Iterator<Item=Token> + 'a> {
        tokens
    }
}


#[cfg(test)]
mod tests {
    use token::Token;

    use super::{DocumentTokenFilter, PassThroughFilter, QueryIndexDocument};

    #[test]
    fn test_pass_through_filter() {
        let tokens = vec![
            Token { term: "hello".to_string(), position: 1 },
            Token { term: "world".to_string(), position: 2 },
        ];

        let filtered = PassThroughFilter.filter("body", Box::new(tokens.clone().into_iter()))
                                        .collect::<Vec<Token>>();

        assert_eq!(filtered, tokens);
    }

    #[test]
    fn test_query_index_document_fields() {
        let doc = QueryIndexDocument::new(hashmap!{
            "title".to_string() => "rust".to_string(),
        });

        assert_eq!(doc.field("title"), Some("rust"));
        assert_eq!(doc.field("body"), None);
    }
}
