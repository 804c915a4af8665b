use snafu::Snafu;

/// Raised when an entity of the filesystem is constructed from arguments it
/// cannot hold. Construction either fully succeeds or nothing is built.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum InvalidArgumentError {
    #[snafu(display("Entry name must not be empty"))]
    EmptyName,
    #[snafu(display("Capacity must not be negative, got {}", capacity))]
    NegativeCapacity { capacity: i64 },
    #[snafu(display("Required argument '{}' is missing", argument))]
    MissingArgument { argument: &'static str },
}
