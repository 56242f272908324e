pub mod health;
pub mod people;
