pub mod rows;

pub use rows::{Column, QueryResult, RowsError, parse_query_result, parse_rows};
