pub mod macros;
pub mod news;
pub mod overview;
pub mod quotes;
pub mod sectors;
