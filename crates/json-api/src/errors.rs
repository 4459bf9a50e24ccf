//! JSON Error Responses
//!
//! Handlers fail with a [`StatusError`]; the catcher renders it as a
//! [`ErrorBody`], one `details` entry per line of the status error's detail.

use salvo::{catcher::Catcher, http::ResBody, prelude::*};

use shopease::{api::ErrorBody, validation::ValidationErrors};

/// Catcher that answers every error status with an [`ErrorBody`].
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_error)
}

/// Formats field errors as status error detail, one field per line.
pub(crate) fn field_detail(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn error_body(res: &Response) -> ErrorBody {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    match &res.body {
        ResBody::Error(error) => ErrorBody {
            error: error.brief.clone(),
            details: error
                .detail
                .as_deref()
                .map(|detail| detail.lines().map(str::to_string).collect())
                .unwrap_or_default(),
        },
        _ => ErrorBody::new(status.canonical_reason().unwrap_or("Error")),
    }
}

#[handler]
async fn render_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let body = error_body(res);

    res.render(Json(body));

    ctrl.skip_rest();
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn reject() -> Result<&'static str, StatusError> {
        Err(StatusError::conflict()
            .brief("Insufficient stock")
            .detail("product 1: requested 4, available 3"))
    }

    fn service() -> Service {
        Service::new(Router::with_path("reject").get(reject)).catcher(catcher())
    }

    #[tokio::test]
    async fn status_error_detail_is_rendered() -> TestResult {
        let mut res = TestClient::get("http://example.com/reject")
            .send(&service())
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
        assert_eq!(body.error, "Insufficient stock");
        assert_eq!(body.details, vec!["product 1: requested 4, available 3"]);

        Ok(())
    }

    #[tokio::test]
    async fn unmatched_route_gets_json_body() -> TestResult {
        let mut res = TestClient::get("http://example.com/missing")
            .send(&service())
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body, ErrorBody::new("Not Found"));

        Ok(())
    }

    #[test]
    fn field_detail_has_one_line_per_field() {
        let mut errors = ValidationErrors::new();
        errors.push("customer_email", "Invalid email address");
        errors.push("customer_city", "City is required");

        assert_eq!(
            field_detail(&errors),
            "customer_email: Invalid email address\ncustomer_city: City is required"
        );
    }
}
