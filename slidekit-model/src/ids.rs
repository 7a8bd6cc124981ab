/// Opaque identity of one dot indicator, handed out by the presentation
/// layer when it builds the indicator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DotId(pub u64);

impl DotId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for DotId {
    fn from(raw: u64) -> Self {
        DotId(raw)
    }
}

impl std::fmt::Display for DotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dot#{}", self.0)
    }
}

/// One of the two boundary navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NavControl {
    Left,
    Right,
}

impl NavControl {
    pub const ALL: [NavControl; 2] = [NavControl::Left, NavControl::Right];
}
