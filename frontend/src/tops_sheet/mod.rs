pub mod modal_sheet;

pub use modal_sheet::ModalSheet;
