/// A positional operation addressed a slot the chain does not reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} is out of bounds for list of length {len}")]
pub struct IndexError {
    /// The index that was requested.
    pub index: usize,
    /// The length of the list at the time of the request.
    pub len: usize,
}
