pub mod data;
pub mod dict;
pub mod intermediate;
