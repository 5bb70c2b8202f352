use common::model::Vocabulary;
use common::selection::Selection;

use super::props::MappingDialogProps;

pub struct MappingDialog {
    /// Options of the three multi-selects. Empty until the fetch completes.
    pub vocabulary: Vocabulary,

    /// What will be written on save.
    pub selection: Selection,
}

impl MappingDialog {
    pub fn new(props: &MappingDialogProps) -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            selection: Selection::new(props.mode, &props.terpene),
        }
    }

    pub fn reseed(&mut self, props: &MappingDialogProps) {
        self.selection = Selection::new(props.mode, &props.terpene);
    }
}
