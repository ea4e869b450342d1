pub mod dom_model;
pub mod html_source;
