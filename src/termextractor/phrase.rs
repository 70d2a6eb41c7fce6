//! Extracts an obligation from a phrase query
//!
//! Every word of a phrase must be present in a matching document, so any
//! single word is a sound obligation. The longest one is kept as it is
//! likely the most selective.

use query::Query;
use termextractor::{Extractor, QueryTerm, QueryTermExtractor};


pub struct PhraseExtractor;


impl Extractor for PhraseExtractor {
    fn extract(&self, query: &Query, _chain: &QueryTermExtractor) -> Option<Vec<QueryTerm>> {
        match *query {
            Query::Phrase{ref field, ref terms} => {
                match terms.iter().max_by_key(|term| term.len()) {
                    Some(term) => Some(vec![QueryTerm::exact(field, term)]),
                    None => Some(vec![QueryTerm::any(field)]),
                }
            }
            _ => None,
        }
    }
}
