mod common;
mod personal_code;
mod segment;
