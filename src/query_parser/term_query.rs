//! Parses "term" queries

use serde_json::Value as Json;

use query::Query;
use query_parser::QueryParseError;


pub fn parse(json: &Json) -> Result<Query, QueryParseError> {
    let object = try!(json.as_object().ok_or(QueryParseError::ExpectedObject));

    let field_name = if object.len() == 1 {
        object.keys().collect::<Vec<_>>()[0]
    } else {
        return Err(QueryParseError::ExpectedSingleKey)
    };

    let term = try!(object.get(field_name).unwrap().as_str()
                          .ok_or(QueryParseError::ExpectedString));

    Ok(Query::Term {
        field: field_name.clone(),
        term: term.to_string(),
    })
}
