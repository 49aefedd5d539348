pub mod card;
pub mod chapter_list;
pub mod session_summary;
