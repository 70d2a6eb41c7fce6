//! Extracts obligations from a disjunction
//!
//! A document matching an OR may match any single branch, so every branch
//! must contribute its obligations. A branch that degrades to the ANY
//! sentinel makes the sentinel part of the disjunction's obligations too.

use query::Query;
use termextractor::{Extractor, QueryTerm, QueryTermExtractor};


pub struct DisjunctionExtractor;


impl Extractor for DisjunctionExtractor {
    fn extract(&self, query: &Query, chain: &QueryTermExtractor) -> Option<Vec<QueryTerm>> {
        match *query {
            Query::Disjunction{ref queries} => {
                let mut terms = Vec::new();

                for subquery in queries.iter() {
                    terms.extend(chain.extract_node(subquery));
                }

                Some(terms)
            }
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use query::Query;
    use termextractor::{Extractor, QueryTerm, QueryTermExtractor};

    use super::DisjunctionExtractor;

    fn chain() -> QueryTermExtractor {
        QueryTermExtractor::new(QueryTermExtractor::default_extractors())
    }

    #[test]
    fn test_every_branch_contributes() {
        let query = Query::Disjunction {
            queries: vec![
                Query::new_term("body", "systems"),
                Query::new_term("body", "unsafe"),
            ],
        };

        let terms = DisjunctionExtractor.extract(&query, &chain()).unwrap();

        assert_eq!(terms, vec![
            QueryTerm::exact("body", "systems"),
            QueryTerm::exact("body", "unsafe"),
        ]);
    }

    #[test]
    fn test_any_branch_propagates() {
        let query = Query::Disjunction {
            queries: vec![
                Query::new_term("body", "systems"),
                Query::Range {
                    field: "body".to_string(),
                    lower: Some("a".to_string()),
                    upper: None,
                },
            ],
        };

        let terms = DisjunctionExtractor.extract(&query, &chain()).unwrap();

        assert_eq!(terms, vec![
            QueryTerm::exact("body", "systems"),
            QueryTerm::any("body"),
        ]);
    }

    #[test]
    fn test_ignores_other_kinds() {
        let terms = DisjunctionExtractor.extract(&Query::new_term("title", "rust"), &chain());

        assert_eq!(terms, None);
    }
}
