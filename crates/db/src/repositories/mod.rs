pub mod attachment_repo;
pub mod category_repo;
pub mod diary_repo;

pub use attachment_repo::AttachmentRepo;
pub use category_repo::CategoryRepo;
pub use diary_repo::DiaryRepo;
