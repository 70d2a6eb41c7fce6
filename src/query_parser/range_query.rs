//! Parses "range" queries

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

    let bounds = try!(object.get(field_name).unwrap().as_object()
                            .ok_or(QueryParseError::ExpectedObject));

    let mut lower: Option<String> = None;
    let mut upper: Option<String> = None;

    for (key, value) in bounds.iter() {
        let value = try!(value.as_str().ok_or(QueryParseError::ExpectedString));

        match key.as_ref() {
            "gte" => lower = Some(value.to_string()),
            "lte" => upper = Some(value.to_string()),
            _ => return Err(QueryParseError::UnrecognisedKey(key.clone()))
        }
    }

    if lower == None && upper == None {
        return Err(QueryParseError::InvalidValue);
    }

    Ok(Query::Range {
        field: field_name.clone(),
        lower: lower,
        upper: upper,
    })
}


#[cfg(test)]
mod tests {
    use serde_json;

    use query::Query;
    use query_parser::QueryParseError;

    use super::parse;

    #[test]
    fn test_range_query() {
        let query = parse(&serde_json::from_str("
        {
            \"price\": {
                \"gte\": \"100\",
                \"lte\": \"200\"
            }
        }
        ").unwrap());

        assert_eq!(query, Ok(Query::Range {
            field: "price".to_string(),
            lower: Some("100".to_string()),
            upper: Some("200".to_string()),
        }));
    }

    #[test]
    fn test_range_query_single_bound() {
        let query = parse(&serde_json::from_str("
        {
            \"price\": {
                \"gte\": \"100\"
            }
        }
        ").unwrap());

        assert_eq!(query, Ok(Query::Range {
            field: "price".to_string(),
            lower: Some("100".to_string()),
            upper: None,
        }));
    }

    #[test]
    fn test_gives_error_for_unknown_bound() {
        let query = parse(&serde_json::from_str("
        {
            \"price\": {
                \"above\": \"100\"
            }
        }
        ").unwrap());

        assert_eq!(query.err(), Some(QueryParseError::UnrecognisedKey("above".to_string())));
    }

    #[test]
    fn test_gives_error_for_no_bounds() {
        let query = parse(&serde_json::from_str("
        {
            \"price\": {}
        }
        ").unwrap());

        assert_eq!(query.err(), Some(QueryParseError::InvalidValue));
    }
}
