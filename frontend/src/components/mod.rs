pub mod citations;
pub mod helpers;
pub mod mapping_dialog;
pub mod mapping_page;
pub mod navbar;
pub mod terpene_select;
