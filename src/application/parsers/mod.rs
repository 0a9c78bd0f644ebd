pub mod weekday_parser;

pub use weekday_parser::parse_weekday_list;
