pub mod availability;
pub mod pricing;
pub mod quote;
pub mod resolver;
pub mod timeutil;
