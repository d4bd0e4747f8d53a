use std::fmt;

/// Identifier of a source unit within one analysis run.
///
/// Uses u32 for compact storage; the driver assigns ids when it hands
/// parsed units to [`crate::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FileId(pub u32);

impl FileId {
    /// Create a new FileId from an index
    pub fn new(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}
