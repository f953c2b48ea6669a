// Business domains
pub mod committees;
