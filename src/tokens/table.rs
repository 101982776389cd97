use enum_assoc::Assoc;
use theme_value::ThemeValue;

use crate::theme::{ThemeConfig, ThemeError};

/// How a token table joins a theme configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMerge {
    /// The whole table becomes one category.
    Category(&'static str),
    /// Each top-level entry of the table becomes its own category.
    Spread,
}

/// The token tables bundled with this crate.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn file(&self) -> &'static str)]
#[func(pub fn merge(&self) -> TableMerge)]
pub enum TokenTable {
    #[assoc(file = "colors.json")]
    #[assoc(merge = TableMerge::Category("colors"))]
    Colors,

    #[assoc(file = "screens.json")]
    #[assoc(merge = TableMerge::Category("screens"))]
    Screens,

    #[assoc(file = "z-indices.json")]
    #[assoc(merge = TableMerge::Category("zIndex"))]
    ZIndex,

    #[assoc(file = "shadows.json")]
    #[assoc(merge = TableMerge::Category("boxShadow"))]
    BoxShadow,

    #[assoc(file = "border-radius.json")]
    #[assoc(merge = TableMerge::Category("borderRadius"))]
    BorderRadius,

    /// `transitionProperty`, `transitionTimingFunction` and `transitionDuration`.
    #[assoc(file = "transitions.json")]
    #[assoc(merge = TableMerge::Spread)]
    Transition,

    /// `fontFamily`, `fontSize`, `fontWeight`, `lineHeight` and `letterSpacing`.
    #[assoc(file = "typography.json")]
    #[assoc(merge = TableMerge::Spread)]
    Typography,
}

impl TokenTable {
    /// Every table, in the order the custom theme combines them.
    pub const ALL: [TokenTable; 7] = [
        TokenTable::Colors,
        TokenTable::Screens,
        TokenTable::ZIndex,
        TokenTable::BoxShadow,
        TokenTable::BorderRadius,
        TokenTable::Transition,
        TokenTable::Typography,
    ];

    /// Adds a loaded table to `config`.
    pub fn apply(&self, config: &mut ThemeConfig, table: ThemeValue) -> Result<(), ThemeError> {
        match self.merge() {
            TableMerge::Category(name) => {
                config.insert(name, table);
                Ok(())
            }
            TableMerge::Spread => config.spread(table),
        }
    }
}
