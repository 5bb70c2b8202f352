use common::model::{AttributeKind, Id, Vocabulary};

pub enum Msg {
    VocabularyLoaded(Vocabulary),
    /// Click on a vocabulary option.
    Toggle(AttributeKind, Id),
    /// Delete button of a chip.
    Remove(AttributeKind, Id),
    Reset,
    Clear,
    Save,
    Saved,
    Close,
}
