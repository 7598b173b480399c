pub mod sanitize;
pub mod time_format;
pub mod validate;
