pub mod car;
pub mod cars;
