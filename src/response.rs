use serde::{Deserialize, Serialize};

/// Enumerated outcome codes carried in every response envelope.
///
/// Success codes live in the 2xxxx range, client errors in 4xxxx and
/// server errors in 5xxxx, each suffixed with a per-entity ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    TagWasCreated,
    TagWasDeleted,
    TagNotFound,
    TagNotExist,
    TagFieldsNotValid,
    InternalError,
}

impl ResponseCode {
    pub fn code(self) -> i64 {
        match self {
            ResponseCode::TagWasCreated => 20101,
            ResponseCode::TagWasDeleted => 20001,
            ResponseCode::TagNotFound => 40401,
            ResponseCode::TagNotExist => 40001,
            ResponseCode::TagFieldsNotValid => 40002,
            ResponseCode::InternalError => 50001,
        }
    }
}

/// Uniform `{code, message}` body returned for every non-GET outcome,
/// success or failure. Built fresh per request, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    pub message: String,
}

impl ApiResponse {
    pub fn new(code: ResponseCode, message: impl Into<String>) -> Self {
        ApiResponse {
            code: code.code(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ResponseCode::TagWasCreated.code(), 20101);
        assert_eq!(ResponseCode::TagWasDeleted.code(), 20001);
        assert_eq!(ResponseCode::TagNotFound.code(), 40401);
        assert_eq!(ResponseCode::TagNotExist.code(), 40001);
        assert_eq!(ResponseCode::TagFieldsNotValid.code(), 40002);
    }

    #[test]
    fn envelope_serializes_flat() {
        let body = ApiResponse::new(ResponseCode::TagWasDeleted, "done");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"code": 20001, "message": "done"}));
    }
}
