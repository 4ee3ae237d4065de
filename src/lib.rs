//! # SeqComb - Composable Parser Combinators
//!
//! A small parser combinator core for sequential input (text or token
//! streams). Complex parsers are assembled from small reusable steps with
//! functional composition instead of hand-written recursive descent:
//!
//! - **Zero panics**: every parse outcome travels through `Result` types
//! - **Pure parsers**: no mutable state, same cursor in means same result out
//! - **Rich error reporting**: failures carry line numbers and source context
//! - **Composability**: `map`, `then`, `amap` and `pure` build big parsers
//!   out of small ones without executing anything until `parse` is called
//!
//! Composition assembles values only; invoking [`Parser::parse`] on the
//! composed value drives the chain, threading the advanced cursor through
//! each step and short-circuiting on the first failure.

pub mod amap;
pub mod atomic;
pub mod cursor;
pub mod error;
pub mod map;
pub mod map_err;
pub mod outcome;
pub mod parser;
pub mod pure;
pub mod string;
pub mod then;

pub use amap::{AMap, AMapExt, amap};
pub use atomic::Atomic;
pub use cursor::{ByteCursor, Cursor};
pub use error::{CodeLoc, ReadablePosition, SeqcombError};
pub use map::{Map, MapExt, map};
pub use map_err::{MapErr, MapErrExt, map_err};
pub use outcome::Outcome;
pub use parser::Parser;
pub use pure::{Pure, pure};
pub use string::{IsStringParser, is_string};
pub use then::{Then, ThenExt, then};
