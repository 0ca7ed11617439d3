pub mod app;
pub mod form;
pub mod results;
