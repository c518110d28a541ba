use serde::{Deserialize, Serialize};

/// Response envelope shared by every persistence endpoint.
///
/// `success: false` is an application-level failure; `message`, when present,
/// is suitable for showing to the user verbatim. Transport-level failures
/// never produce an envelope at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_and_message_are_optional_on_the_wire() {
        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"success":true}"#).expect("deserializes");
        assert!(response.success);
        assert!(response.data.is_none());
        assert!(response.message.is_none());
    }
}
