pub mod attachments;
pub mod categories;
pub mod diaries;
pub mod trash;
