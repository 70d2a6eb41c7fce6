//! Parses the JSON query DSL used to register queries

pub mod term_query;
pub mod phrase_query;
pub mod range_query;
pub mod wildcard_query;
pub mod and_query;
pub mod or_query;

use serde_json::Value as Json;

use query::Query;


#[derive(Debug, PartialEq)]
pub enum QueryParseError {
    UnrecognisedQueryType(String),
    UnrecognisedKey(String),
    ExpectedObject,
    ExpectedArray,
    ExpectedString,
    ExpectedSingleKey,
    InvalidValue,
}


fn get_query_parser(query_name: &str) -> Option<fn(&Json) -> Result<Query, QueryParseError>> {
    match query_name {
        "term" => Some(term_query::parse),
        "phrase" => Some(phrase_query::parse),
        "range" => Some(range_query::parse),
        "wildcard" => Some(wildcard_query::parse),
        "and" => Some(and_query::parse),
        "or" => Some(or_query::parse),
        _ => None
    }
}


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = try!(json.as_object().ok_or(QueryParseError::ExpectedObject));

    let query_type = if object.len() == 1 {
        object.keys().collect::<Vec<_>>()[0]
    } else {
        return Err(QueryParseError::ExpectedSingleKey)
    };

    match get_query_parser(query_type) {
        Some(parse) => parse(object.get(query_type).unwrap()),
        None => Err(QueryParseError::UnrecognisedQueryType(query_type.clone())),
    }
}
