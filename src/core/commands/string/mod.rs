// src/core/commands/string/mod.rs

//! String-family command values.

pub mod append;
pub mod get;
pub mod getrange;
pub mod getset;
pub mod mget;
pub mod mset;
pub mod msetnx;
pub mod psetex;
pub mod set;
pub mod setex;
pub mod setnx;
pub mod setrange;
pub mod strlen;

pub use append::Append;
pub use get::Get;
pub use getrange::GetRange;
pub use getset::GetSet;
pub use mget::MGet;
pub use mset::MSet;
pub use msetnx::MSetNx;
pub use psetex::PSetEx;
pub use set::{Set, SetCondition, TtlOption};
pub use setex::SetEx;
pub use setnx::SetNx;
pub use setrange::SetRange;
pub use strlen::StrLen;
