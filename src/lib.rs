pub mod proxy;
pub mod syntax;
pub mod traits;
pub mod types;

pub use crate::proxy::{EditorProxy, EditorProxyBuilder};
pub use crate::syntax::{PLAIN_SYNTAX, SyntaxMap, SyntaxMapError};
pub use crate::traits::{EditorHost, ExpansionEditor, ProfileDetector, Prompter, TabStopResolver};
pub use crate::types::{
    ExtractOptions, Extracted, InsertOptions, OffsetRange, Position, Range, TabStop,
};
