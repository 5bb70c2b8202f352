use common::citation::CitationSave;
use common::model::{Id, Terpene, TerpeneObject};
use common::selection::SelectionMode;

pub enum Msg {
    TerpenesLoaded(Vec<Terpene>),
    /// Dropdown change; `None` is the placeholder option.
    SelectTerpene(Option<Id>),
    TerpeneLoaded(TerpeneObject),
    OpenDialog(SelectionMode),
    DialogClosed,
    SaveCitation(CitationSave),
    CitationSaved,
}
