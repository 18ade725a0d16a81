use axum::{
	body::Bytes,
	extract::{
		rejection::{BytesRejection, PathRejection},
		Path, State,
	},
	Json,
};
use hyper::StatusCode;

use crate::{
	cars::car::{Car, CarDetails},
	error::ApiError,
	registry::Registry,
};

const INVALID_ID: &str = "Invalid car ID";

fn parse_id(raw: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
	let raw = raw.map_err(|err| {
		log::debug!("rejected car id path: {}", err);
		ApiError::BadRequest(INVALID_ID)
	})?;
	raw.0.parse().map_err(|_| {
		log::debug!("rejected car id {:?}", raw.0);
		ApiError::BadRequest(INVALID_ID)
	})
}

fn parse_details(body: Result<Bytes, BytesRejection>) -> Result<CarDetails, ApiError> {
	let body = body.map_err(|err| {
		log::warn!("failed to read request body: {}", err);
		ApiError::BadRequest("Invalid request body")
	})?;
	// content type is not checked, any body that decodes is accepted
	CarDetails::from_json(&body).map_err(|err| {
		log::debug!("rejected car body: {}", err);
		ApiError::BadRequest("Invalid JSON format")
	})
}

pub async fn get_cars(db: State<Registry>) -> Json<Vec<Car>> {
	let store = db.read().await;
	log::debug!("listing {} cars", store.len());
	Json(store.list().to_vec())
}

pub async fn get_car(db: State<Registry>, id: Result<Path<String>, PathRejection>) -> Result<Json<Car>, ApiError> {
	let id = parse_id(id)?;
	let store = db.read().await;
	match store.get(id) {
		Some(car) => Ok(Json(car.clone())),
		None => Err(ApiError::NotFound),
	}
}

pub async fn create_car(db: State<Registry>, body: Result<Bytes, BytesRejection>) -> Result<Json<Car>, ApiError> {
	let details = parse_details(body)?;
	let car = db.write().await.create(details);
	log::info!("created car {} ({} {})", car.id, car.make, car.model);
	Ok(Json(car))
}

pub async fn update_car(
	db: State<Registry>,
	id: Result<Path<String>, PathRejection>,
	body: Result<Bytes, BytesRejection>,
) -> Result<Json<Car>, ApiError> {
	let id = parse_id(id)?;
	let details = parse_details(body)?;
	let Some(car) = db.write().await.update(id, details) else {
		return Err(ApiError::NotFound);
	};
	log::info!("updated car {} status={}", car.id, car.status);
	Ok(Json(car))
}

pub async fn delete_car(db: State<Registry>, id: Result<Path<String>, PathRejection>) -> Result<StatusCode, ApiError> {
	let id = parse_id(id)?;
	match db.write().await.delete(id) {
		Some(_) => {
			log::info!("deleted car {}", id);
			Ok(StatusCode::NO_CONTENT)
		}
		None => Err(ApiError::NotFound),
	}
}

// `/cars/` with nothing after the prefix
pub async fn missing_id() -> ApiError {
	log::debug!("rejected empty car id");
	ApiError::BadRequest(INVALID_ID)
}

pub async fn method_not_allowed() -> ApiError {
	ApiError::MethodNotAllowed
}
