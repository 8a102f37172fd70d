//! Physical (`db`) and logical (`app`) schema models.
//!
//! The `db` side describes tables as the database stores them: the built-in
//! tables this system owns and the storage types of custom columns. The `app`
//! side describes what an operator asks for: a display name and a logical
//! column type.

pub mod app;
pub mod db;

pub use db::Schema;
