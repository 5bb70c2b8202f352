use common::config::ClientConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MappingPageProps {
    /// Where the terpene API lives and the fixed list query parameters.
    pub config: ClientConfig,
}
