//! Shared response types and logging setup used by the server and binaries.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_response_serializes_as_object() {
        let m = types::MessageResponse::new("Schedule deleted successfully");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"message": "Schedule deleted successfully"}));
    }
}
