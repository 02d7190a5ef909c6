//! Indentation configuration for generated code.

use serde::Deserialize;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndentRepr")]
pub enum Indent {
    /// Spaces with the specified width: 2, 4 or 8. Any other width renders
    /// as [`Indent::SPACES`]; configuration files reject it outright.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation.
    pub const SPACES: Self = Self::Spaces(4);

    /// Tab indentation (Go).
    pub const GO: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            Self::Spaces(_) => Self::SPACES.as_str(),
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}

/// On-disk form: either `"tab"` or a space width.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Width(u8),
    Name(String),
}

impl TryFrom<IndentRepr> for Indent {
    type Error = String;

    fn try_from(repr: IndentRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentRepr::Width(n @ (2 | 4 | 8)) => Ok(Self::Spaces(n)),
            IndentRepr::Width(n) => Err(format!("unsupported indent width {n}, expected 2, 4 or 8")),
            IndentRepr::Name(name) if name == "tab" => Ok(Self::Tab),
            IndentRepr::Name(name) => Err(format!("unknown indent style '{name}'")),
        }
    }
}
