use std::{ops::Deref, sync::Arc};

use tokio::sync::RwLock;

use crate::cars::car::{Car, CarDetails};

/// Cars in insertion order plus the id counter. Ids are handed out from
/// `next_id` and never reused, even after a delete.
#[derive(Debug, Default)]
pub struct CarStore {
	cars: Vec<Car>,
	next_id: i64,
}

impl CarStore {
	pub fn new() -> CarStore {
		CarStore::default()
	}

	pub fn list(&self) -> &[Car] {
		&self.cars
	}

	pub fn get(&self, id: i64) -> Option<&Car> {
		self.cars.iter().find(|car| car.id == id)
	}

	pub fn create(&mut self, details: CarDetails) -> Car {
		let car = Car::new(self.next_id, details);
		self.next_id += 1;
		self.cars.push(car.clone());
		car
	}

	pub fn update(&mut self, id: i64, details: CarDetails) -> Option<Car> {
		let car = self.cars.iter_mut().find(|car| car.id == id)?;
		car.apply(details);
		Some(car.clone())
	}

	// Vec::remove shifts the tail down, so survivors keep their order.
	pub fn delete(&mut self, id: i64) -> Option<Car> {
		let index = self.cars.iter().position(|car| car.id == id)?;
		Some(self.cars.remove(index))
	}

	pub fn len(&self) -> usize {
		self.cars.len()
	}
}

/// Shared handle passed to every handler through axum's `State`.
#[derive(Clone, Default)]
pub struct Registry(Arc<RwLock<CarStore>>);

impl Registry {
	pub fn new() -> Registry {
		Registry::default()
	}
}

impl Deref for Registry {
	type Target = RwLock<CarStore>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
