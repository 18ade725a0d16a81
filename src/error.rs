use axum::response::{IntoResponse, Response};
use hyper::StatusCode;

#[derive(Debug)]
pub enum ApiError {
	MethodNotAllowed,
	BadRequest(&'static str),
	NotFound,
}

impl ApiError {
	pub fn status(&self) -> StatusCode {
		match self {
			ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ApiError::NotFound => StatusCode::NOT_FOUND,
		}
	}

	pub fn message(&self) -> &'static str {
		match self {
			ApiError::MethodNotAllowed => "Invalid request method",
			ApiError::BadRequest(msg) => *msg,
			ApiError::NotFound => "Car not found",
		}
	}
}

// Errors go out as plain text.
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status(), self.message().to_string()).into_response()
	}
}
