/// Whether an index enforces uniqueness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IndexType {
    #[default]
    Index,
    Unique,
}

impl IndexType {
    /// The tag keyword for this kind of index
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Unique => "unique",
        }
    }
}

/// A table index
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: IndexType,
    pub columns: Vec<String>,
}

impl Index {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: IndexType::Index,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.kind = IndexType::Unique;
        self
    }

    /// Multi-column indexes are rendered with their name, single-column ones bare.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}
