use common::model::TerpeneObject;
use common::selection::SelectionMode;
use yew::prelude::*;

use crate::api::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct MappingDialogProps {
    pub client: ApiClient,
    /// Aggregate as last loaded by the page; seeds the selection.
    pub terpene: TerpeneObject,
    pub mode: SelectionMode,
    /// Fired after a successful save and when the user dismisses the dialog.
    pub on_close: Callback<()>,
}
