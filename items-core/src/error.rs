/// Errors produced by the `items-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An item ID could not be parsed as a positive decimal integer.
    #[error("invalid item id '{raw}': expected a positive decimal integer")]
    InvalidItemId { raw: String },
}
