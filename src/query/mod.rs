//! The query tree
//!
//! Registered queries are boolean combinations of leaf predicates over
//! single fields. The same enum doubles as the candidate query returned by
//! the presearcher: that one only ever contains `Term` leaves combined
//! with `Disjunction`.

use document::InputDocument;


#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    MatchNone,
    Term {
        field: String,
        term: String,
    },
    Phrase {
        field: String,
        terms: Vec<String>,
    },
    Range {
        field: String,
        lower: Option<String>,
        upper: Option<String>,
    },
    Wildcard {
        field: String,
        pattern: String,
    },
    Conjunction {
        queries: Vec<Query>,
    },
    Disjunction {
        queries: Vec<Query>,
    },
}


impl Query {
    pub fn new_term(field: &str, term: &str) -> Query {
        Query::Term {
            field: field.to_string(),
            term: term.to_string(),
        }
    }

    pub fn new_conjunction(queries: Vec<Query>) -> Query {
        match queries.len() {
            0 => Query::MatchNone,
            1 => {
                // Single query, unpack it from queries array and return it
                for query in queries {
                    return query;
                }

                unreachable!();
            }
            _ => {
                Query::Conjunction {
                    queries: queries,
                }
            }
        }
    }

    pub fn new_disjunction(queries: Vec<Query>) -> Query {
        match queries.len() {
            0 => Query::MatchNone,
            1 => {
                // Single query, unpack it from queries array and return it
                for query in queries {
                    return query;
                }

                unreachable!();
            }
            _ => {
                Query::Disjunction {
                    queries: queries,
                }
            }
        }
    }

    /// The distinct field names this query touches, in first-seen order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        self.collect_fields(&mut fields);
        fields
    }

    fn collect_fields<'a>(&'a self, fields: &mut Vec<&'a str>) {
        match *self {
            Query::MatchNone => {}
            Query::Term{ref field, ..} |
            Query::Phrase{ref field, ..} |
            Query::Range{ref field, ..} |
            Query::Wildcard{ref field, ..} => {
                if !fields.contains(&field.as_str()) {
                    fields.push(field);
                }
            }
            Query::Conjunction{ref queries} | Query::Disjunction{ref queries} => {
                for query in queries {
                    query.collect_fields(fields);
                }
            }
        }
    }

    pub fn matches(&self, doc: &InputDocument) -> bool {
        match *self {
            Query::MatchNone => false,
            Query::Term{ref field, ref term} => {
                if let Some(field_value) = doc.fields.get(field) {
                    for field_token in field_value.iter() {
                        if &field_token.term == term {
                            return true;
                        }
                    }
                }

                false
            }
            Query::Phrase{ref field, ref terms} => {
                if terms.is_empty() {
                    return false;
                }

                if let Some(field_value) = doc.fields.get(field) {
                    for field_token in field_value.iter() {
                        if field_token.term != terms[0] {
                            continue;
                        }

                        // Remaining words must follow at consecutive positions
                        let mut matched = true;
                        for (offset, term) in terms.iter().enumerate().skip(1) {
                            let position = field_token.position + offset as u32;
                            let found = field_value.iter().any(|token| {
                                token.position == position && &token.term == term
                            });

                            if !found {
                                matched = false;
                                break;
                            }
                        }

                        if matched {
                            return true;
                        }
                    }
                }

                false
            }
            Query::Range{ref field, ref lower, ref upper} => {
                if let Some(field_value) = doc.fields.get(field) {
                    for field_token in field_value.iter() {
                        let above = match *lower {
                            Some(ref lower) => field_token.term >= *lower,
                            None => true,
                        };
                        let below = match *upper {
                            Some(ref upper) => field_token.term <= *upper,
                            None => true,
                        };

                        if above && below {
                            return true;
                        }
                    }
                }

                false
            }
            Query::Wildcard{ref field, ref pattern} => {
                if let Some(field_value) = doc.fields.get(field) {
                    for field_token in field_value.iter() {
                        if wildcard_match(pattern, &field_token.term) {
                            return true;
                        }
                    }
                }

                false
            }
            Query::Conjunction{ref queries} => {
                // A boolean query with no clauses matches nothing
                if queries.is_empty() {
                    return false;
                }

                for query in queries {
                    if !query.matches(doc) {
                        return false;
                    }
                }

                return true;
            }
            Query::Disjunction{ref queries} => {
                for query in queries {
                    if query.matches(doc) {
                        return true;
                    }
                }

                return false;
            }
        }
    }
}


/// Glob matching with `*` as the only wildcard.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    let segments = pattern.split('*').collect::<Vec<&str>>();

    if segments.len() == 1 {
        return pattern == text;
    }

    // First segment is anchored to the start, last to the end, the rest
    // just have to appear in order
    let first = segments[0];
    let last = segments[segments.len() - 1];

    if !text.starts_with(first) {
        return false;
    }

    let mut rest = &text[first.len()..];

    for segment in segments[1..segments.len() - 1].iter() {
        if segment.is_empty() {
            continue;
        }

        match rest.find(segment) {
            Some(index) => {
                rest = &rest[index + segment.len()..];
            }
            None => return false,
        }
    }

    rest.ends_with(last)
}
