pub mod candidates;
pub mod health;
