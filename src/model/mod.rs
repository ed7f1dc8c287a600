//! Document model - the state owned per open document

pub mod document;

pub use document::Document;
