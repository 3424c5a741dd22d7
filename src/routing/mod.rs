//! Routing module
//!
//! Maps request method and path to a handler through a fixed route
//! table, matched first-hit in declaration order.

mod table;

pub use table::{match_route, RouteTarget, StaticTree};
