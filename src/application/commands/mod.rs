pub mod authors;
pub mod records;
