pub mod root;
pub mod tasku;
