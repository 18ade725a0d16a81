#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Car {
	pub id: i64,
	pub make: String,
	pub model: String,
	pub year: i64,
	// Available, In Service or Rented, not enforced
	pub status: String,
}

/// Request body for create and update. Any `id` the client sends is dropped
/// here, and missing fields fall back to their zero values.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CarDetails {
	pub make: String,
	pub model: String,
	pub year: i64,
	pub status: String,
}

impl CarDetails {
	/// Decodes a body with field names matched case-insensitively, so `Make`
	/// fills `make`. An exact lowercase key wins over other spellings.
	pub fn from_json(body: &[u8]) -> serde_json::Result<CarDetails> {
		let value = match serde_json::from_slice(body)? {
			serde_json::Value::Object(fields) => {
				let mut folded = serde_json::Map::new();
				let (exact, other): (Vec<_>, Vec<_>) =
					fields.into_iter().partition(|(key, _)| key.to_lowercase() == *key);
				for (key, value) in other.into_iter().chain(exact) {
					folded.insert(key.to_lowercase(), value);
				}
				serde_json::Value::Object(folded)
			}
			value => value,
		};
		serde_json::from_value(value)
	}
}

impl Car {
	pub fn new(id: i64, details: CarDetails) -> Car {
		Car {
			id,
			make: details.make,
			model: details.model,
			year: details.year,
			status: details.status,
		}
	}

	pub fn apply(&mut self, details: CarDetails) {
		self.make = details.make;
		self.model = details.model;
		self.year = details.year;
		self.status = details.status;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn details_ignore_client_id() {
		let details: CarDetails =
			serde_json::from_str(r#"{"id":42,"make":"Toyota","model":"Corolla","year":2020,"status":"Available"}"#).unwrap();
		let car = Car::new(7, details);
		assert_eq!(car.id, 7);
		assert_eq!(car.make, "Toyota");
		assert_eq!(car.year, 2020);
	}

	#[test]
	fn details_default_missing_fields() {
		let details: CarDetails = serde_json::from_str(r#"{"make":"Ford"}"#).unwrap();
		assert_eq!(details.model, "");
		assert_eq!(details.year, 0);
	}

	#[test]
	fn details_reject_wrong_types() {
		assert!(serde_json::from_str::<CarDetails>(r#"{"year":"new"}"#).is_err());
	}

	#[test]
	fn from_json_folds_field_case() {
		let details = CarDetails::from_json(br#"{"Make":"Volvo","MODEL":"XC60","Year":2019,"sTaTuS":"Rented"}"#).unwrap();
		assert_eq!(details, CarDetails {
			make: "Volvo".to_string(),
			model: "XC60".to_string(),
			year: 2019,
			status: "Rented".to_string(),
		});
	}

	#[test]
	fn from_json_prefers_exact_key() {
		let details = CarDetails::from_json(br#"{"make":"Saab","Make":"Volvo"}"#).unwrap();
		assert_eq!(details.make, "Saab");
	}

	#[test]
	fn from_json_rejects_non_objects() {
		assert!(CarDetails::from_json(b"[1,2]").is_err());
		assert!(CarDetails::from_json(b"{").is_err());
	}

	#[test]
	fn apply_keeps_id() {
		let mut car = Car::new(3, CarDetails::default());
		car.apply(CarDetails {
			make: "Honda".to_string(),
			model: "Civic".to_string(),
			year: 2018,
			status: "Rented".to_string(),
		});
		assert_eq!(car.id, 3);
		assert_eq!(car.status, "Rented");
	}
}
