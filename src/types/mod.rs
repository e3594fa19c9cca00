//! Core types for topiclens.

pub mod chunk;
pub mod image;
pub mod language;
pub mod mode;
pub mod request;
pub mod stream;

pub use chunk::*;
pub use image::*;
pub use language::*;
pub use mode::*;
pub use request::*;
pub use stream::*;
