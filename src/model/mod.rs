//! Document model types.
//!
//! `Node` is the read-only tree handed over by the HTML parser; the table
//! types hold a single `<table>` while it is turned into an ASCII grid.

mod node;
mod table;

pub use node::{Element, Node};
pub use table::{TableCell, TableGrid, TableRow, MAX_SPAN};
