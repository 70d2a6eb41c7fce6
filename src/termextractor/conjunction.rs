//! Extracts obligations from a conjunction
//!
//! A document matching an AND matches every branch, so the terms of a
//! single branch are a sound obligation set for the whole conjunction.
//! Which branch to keep is a selectivity heuristic, not a correctness
//! requirement.

use std::cmp::Reverse;

use query::Query;
use termextractor::{Extractor, QueryTerm, QueryTermExtractor};


pub struct ConjunctionExtractor;


impl Extractor for ConjunctionExtractor {
    fn extract(&self, query: &Query, chain: &QueryTermExtractor) -> Option<Vec<QueryTerm>> {
        match *query {
            Query::Conjunction{ref queries} => {
                let best = queries.iter()
                                  .map(|subquery| chain.extract_node(subquery))
                                  .min_by_key(|terms| weight(terms));

                Some(best.unwrap_or_else(Vec::new))
            }
            _ => None,
        }
    }
}


/// Branch ranking: precise obligations beat ANY sentinels, fewer
/// obligations beat many, longer terms beat short ones.
fn weight(terms: &[QueryTerm]) -> (usize, usize, Reverse<usize>) {
    let any_count = terms.iter().filter(|term| term.is_any()).count();
    let text_len = terms.iter()
                        .map(|term| match *term {
                            QueryTerm::Exact(ref term) => term.text.len(),
                            QueryTerm::Any{..} => 0,
                        })
                        .sum::<usize>();

    (any_count, terms.len(), Reverse(text_len))
}
