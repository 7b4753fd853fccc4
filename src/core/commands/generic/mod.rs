// src/core/commands/generic/mod.rs

//! Key-space command values.

pub mod del;
pub mod exists;
pub mod keys;
pub mod randomkey;
pub mod rename;
pub mod renamenx;
pub mod type_cmd;

pub use del::Del;
pub use exists::Exists;
pub use keys::Keys;
pub use randomkey::RandomKey;
pub use rename::Rename;
pub use renamenx::RenameNx;
pub use type_cmd::{KeyType, Type};
