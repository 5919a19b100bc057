pub mod json_gallery_repository;
pub mod json_prompt_history_repository;
pub mod slot_storage;

pub use crate::json_gallery_repository::JsonGalleryRepository;
pub use crate::json_prompt_history_repository::JsonPromptHistoryRepository;
pub use crate::slot_storage::JsonSlotStorage;
