pub mod cursor;
pub mod error;
pub mod line;
pub mod models;


pub use cursor::{DecimalParts, LineCursor};
pub use error::ParseError;
pub use line::parse_line;
pub use models::ShoppingListItem;
