use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TableError;

/// Column alignment applied uniformly to every column of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Every accepted alignment, in the order reported by error messages.
    pub const ALL: [Alignment; 3] = [Alignment::Left, Alignment::Center, Alignment::Right];

    pub fn name(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    /// Separator cell emitted on the second line of the table.
    pub fn token(self) -> &'static str {
        match self {
            Alignment::Left => " :--- ",
            Alignment::Center => " :---: ",
            Alignment::Right => " ---: ",
        }
    }

    fn expected_values() -> String {
        let names: Vec<String> = Self::ALL
            .iter()
            .map(|alignment| format!("'{}'", alignment.name()))
            .collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alignment {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alignment| alignment.name() == s)
            .ok_or_else(|| TableError::InvalidArgument {
                arg: "all_cols_alignment",
                expected: Self::expected_values(),
            })
    }
}

impl TryFrom<&str> for Alignment {
    type Error = TableError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Run each cell's inner HTML through the inline converter before escaping.
    pub convert_cell_html: bool,
    pub all_cols_alignment: Alignment,
}
