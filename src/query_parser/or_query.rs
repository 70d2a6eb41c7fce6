//! Parses "or" queries

use serde_json::Value as Json;

use query::Query;
use query_parser::{QueryParseError, parse as parse_query};


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let clauses = try!(json.as_array().ok_or(QueryParseError::ExpectedArray));

    let mut queries = Vec::new();
    for clause in clauses.iter() {
        queries.push(try!(parse_query(clause)));
    }

    Ok(Query::new_disjunction(queries))
}
