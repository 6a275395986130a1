pub mod text;
pub mod unescape;
pub mod value;
