use crate::core::gateway::{GatewayRequest, GatewayResponse};
use crate::domain::ports::Handler;
use crate::utils::error::ApiError;
use async_trait::async_trait;

/// Placeholder for shift lookup and creation. Answers 501 until the
/// [`Shift`](crate::domain::model::Shift) record is designed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShiftHandler;

impl ShiftHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for ShiftHandler {
    async fn handle(&self, request: GatewayRequest) -> GatewayResponse {
        tracing::info!(method = %request.http_method, "Handling shift request");

        let err = match request.http_method.as_str() {
            "GET" => ApiError::NotImplemented {
                operation: "show shift".to_string(),
            },
            "POST" => ApiError::NotImplemented {
                operation: "create shift".to_string(),
            },
            other => ApiError::MethodNotAllowed {
                method: other.to_string(),
            },
        };

        GatewayResponse::from(err)
    }
}
