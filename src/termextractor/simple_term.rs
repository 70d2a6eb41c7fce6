//! Extracts the obligation from a single term query

use query::Query;
use termextractor::{Extractor, QueryTerm, QueryTermExtractor};


pub struct SimpleTermExtractor;


impl Extractor for SimpleTermExtractor {
    fn extract(&self, query: &Query, _chain: &QueryTermExtractor) -> Option<Vec<QueryTerm>> {
        match *query {
            Query::Term{ref field, ref term} => {
                Some(vec![QueryTerm::exact(field, term)])
            }
            _ => None,
        }
    }
}
