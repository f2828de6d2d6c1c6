mod document;

pub use document::serve_document;
