pub mod fetch;
pub mod health;
