pub mod parsers;
pub mod services;
