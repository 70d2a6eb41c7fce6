//! Parses "phrase" queries

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

    let text = try!(object.get(field_name).unwrap().as_str()
                          .ok_or(QueryParseError::ExpectedString));

    let terms = text.split_whitespace()
                    .map(|word| word.to_string())
                    .collect::<Vec<String>>();

    if terms.is_empty() {
        return Err(QueryParseError::InvalidValue);
    }

    Ok(Query::Phrase {
        field: field_name.clone(),
        terms: terms,
    })
}
