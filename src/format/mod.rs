//! Graph file I/O and result presentation.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::GraphDocument;
pub use reader::GraphReader;
pub use writer::{property_sentence, render_list, GraphWriter};
