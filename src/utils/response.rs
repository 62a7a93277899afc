use serde::Serialize;

/// The JSON envelope every endpoint answers with:
/// `{"status": bool, "message"?: string, "data"?: ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn ok_with(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    pub fn data(data: T) -> Self {
        Self {
            status: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let body = serde_json::to_value(ApiResponse::<()>::ok("done")).unwrap();
        assert_eq!(body, serde_json::json!({"status": true, "message": "done"}));

        let body = serde_json::to_value(ApiResponse::<()>::fail("nope")).unwrap();
        assert_eq!(body, serde_json::json!({"status": false, "message": "nope"}));
    }

    #[test]
    fn data_round_trips_through_the_envelope() {
        let body = serde_json::to_value(ApiResponse::data(vec![1, 2, 3])).unwrap();
        assert_eq!(body, serde_json::json!({"status": true, "data": [1, 2, 3]}));
    }
}
