use strum_macros::{Display, EnumIter};

/// Semantic category of a piece of console output.
///
/// Only console bindings interpret tags; the rest of the crate just passes them
/// through.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Default,
    Header,
    Footer,
    Prompt,
    Input,
    Result,
    Error,
}
