//! Lambda event handler.

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;

use doc_indexer_pipeline::orchestrator::Orchestrator;

/// Fixed response returned for every completed invocation.
///
/// Item-level failures are isolated inside the orchestrator and reported
/// through logs and the batch report; they never fail the invocation.
#[derive(Debug, Serialize)]
pub struct InvocationResponse {
    /// Always `success`.
    pub status: &'static str,
}

/// Handle one Lambda invocation.
///
/// Runs the whole batch through the orchestrator and resolves to the fixed
/// success response regardless of per-item outcomes.
pub async fn function_handler(
    event: LambdaEvent<S3Event>,
    orchestrator: &Orchestrator,
) -> Result<InvocationResponse, Error> {
    orchestrator.handle_event(&event.payload).await;

    Ok(InvocationResponse { status: "success" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_to_the_fixed_success_value() {
        let response = InvocationResponse { status: "success" };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "status": "success" })
        );
    }
}
