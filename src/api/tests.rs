//! API Envelope Tests
//!
//! Validates the wire shape of the envelope: integer status codes, JSON
//! field names, and the success/failure constructors.

#[cfg(test)]
mod tests {
    use crate::api::types::{
        IndexResponse, SearchHit, SearchRequest, SearchResponse, StatusCode,
    };

    // ============================================================
    // STATUS CODE SERIALIZATION
    // ============================================================

    #[test]
    fn test_status_code_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&StatusCode::Success).unwrap(), "0");
        assert_eq!(serde_json::to_string(&StatusCode::InvalidPath).unwrap(), "1");
        assert_eq!(serde_json::to_string(&StatusCode::IoError).unwrap(), "2");
        assert_eq!(serde_json::to_string(&StatusCode::ParseError).unwrap(), "3");
    }

    #[test]
    fn test_status_code_deserializes_from_integer() {
        let code: StatusCode = serde_json::from_str("3").unwrap();
        assert_eq!(code, StatusCode::ParseError);
    }

    #[test]
    fn test_unknown_status_code_is_rejected() {
        let result: Result<StatusCode, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }

    // ============================================================
    // ENVELOPE SHAPES
    // ============================================================

    #[test]
    fn test_index_response_wire_shape() {
        let json = serde_json::to_value(IndexResponse::success()).unwrap();
        assert_eq!(json, serde_json::json!({"status": 0, "msg": ""}));
    }

    #[test]
    fn test_search_response_wire_shape() {
        let response = SearchResponse::success(vec!["Portugal".to_string()]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": 0,
                "msg": "",
                "docs": [{"key": "Portugal"}],
            })
        );
    }

    #[test]
    fn test_failure_response_carries_message_and_empty_docs() {
        let response = SearchResponse::failure(StatusCode::ParseError, "bad query");
        assert_eq!(response.status, StatusCode::ParseError);
        assert_eq!(response.msg, "bad query");
        assert!(response.docs.is_empty());
    }

    #[test]
    fn test_search_request_roundtrip() {
        let req = SearchRequest {
            dataset: "dataset1".to_string(),
            branch: "branch1".to_string(),
            query: "Ronaldo".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let back: SearchRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dataset, "dataset1");
        assert_eq!(back.branch, "branch1");
        assert_eq!(back.query, "Ronaldo");
    }

    #[test]
    fn test_search_hit_equality() {
        let a = SearchHit {
            key: "Argentina".to_string(),
        };
        let b: SearchHit = serde_json::from_str(r#"{"key":"Argentina"}"#).unwrap();
        assert_eq!(a, b);
    }
}
