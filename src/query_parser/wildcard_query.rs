//! Parses "wildcard" queries

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

    let pattern = try!(object.get(field_name).unwrap().as_str()
                             .ok_or(QueryParseError::ExpectedString));

    Ok(Query::Wildcard {
        field: field_name.clone(),
        pattern: pattern.to_string(),
    })
}


#[cfg(test)]
mod tests {
    use serde_json;

    use query::Query;
    use query_parser::QueryParseError;

    use super::parse;

    #[test]
    fn test_wildcard_query() {
        let query = parse(&serde_json::from_str("
        {
            \"title\": \"ru*\"
        }
        ").unwrap());

        assert_eq!(query, Ok(Query::Wildcard {
            field: "title".to_string(),
            pattern: "ru*".to_string(),
        }));
    }

    #[test]
    fn test_gives_error_for_incorrect_type() {
        let query = parse(&serde_json::from_str("
        {
            \"title\": 123
        }
        ").unwrap());

        assert_eq!(query.err(), Some(QueryParseError::ExpectedString));
    }
}
