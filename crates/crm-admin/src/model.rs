//! Records of the built-in tables and the live-table projection.

mod client;
pub use client::{Client, ClientUpdate, NewClient};

mod column;
pub use column::{ColumnDescriptor, ColumnUpdate, LiveColumn, NewColumn};

mod user;
pub use user::{CrmUser, NewUser, UserUpdate};
