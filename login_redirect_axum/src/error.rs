use http::{Result as HttpResponse, StatusCode};
use login_redirect::RedirectError;

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// A principal no rule recognizes is a policy misconfiguration, not a client error
impl<T> IntoResponseError<T> for Result<T, RedirectError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                RedirectError::InvalidState(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}

/// Implementation for http::Error (used by Response::builder())
impl<T> IntoResponseError<T> for HttpResponse<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_is_internal_server_error() {
        let result: Result<(), RedirectError> =
            Err(RedirectError::InvalidState("no rule".to_string()));

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, message)) = response_error {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(message, "Invalid state: no rule");
        }
    }

    #[test]
    fn test_success_case() {
        let result: Result<String, RedirectError> = Ok("Success".to_string());

        let response_error = result.into_response_error();

        assert_eq!(response_error, Ok("Success".to_string()));
    }

    #[test]
    fn test_http_error() {
        // 1000 is not a valid status code
        let result: HttpResponse<String> = Err(StatusCode::from_u16(1000).unwrap_err().into());

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, _)) = response_error {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
