pub mod attachment;
pub mod category;
pub mod diary;
pub mod page;
