#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TilingStrategyKinds {
    #[default]
    Row,
    Block,
}

impl TilingStrategyKinds {
    pub const ALL: &'static [Self] = &[Self::Row, Self::Block];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Row => "Row",
            Self::Block => "Block",
        }
    }
}

impl std::fmt::Display for TilingStrategyKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
