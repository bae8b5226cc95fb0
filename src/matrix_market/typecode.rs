//! Matrix Market banner classification
//!
//! The banner is the first line of a Matrix Market file:
//!
//! ```text
//! %%MatrixMarket matrix coordinate real symmetric
//! ```
//!
//! Keywords are matched case-insensitively. The symmetry word may be omitted,
//! in which case the matrix is treated as general.

use std::fmt;

use crate::error::FormatError;

/// Banner prefix identifying a Matrix Market file
pub const BANNER: &str = "%%MatrixMarket";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Object {
    Matrix,
    Vector,
}

/// Storage scheme of the file body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Sparse, one `row col [value]` line per entry
    Coordinate,
    /// Dense, column-major values
    Array,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Real,
    Integer,
    Complex,
    /// No values; every listed entry is 1.0
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    General,
    /// Only one triangle is listed
    Symmetric,
    SkewSymmetric,
    Hermitian,
}

macro_rules! keywords {
    ($ty:ident { $($variant:ident => $word:literal),+ $(,)? }) => {
        impl $ty {
            fn from_keyword(word: &str) -> Option<Self> {
                match word {
                    $($word => Some($ty::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $word,)+
                }
            }
        }
    };
}

keywords!(Object { Matrix => "matrix", Vector => "vector" });
keywords!(Format { Coordinate => "coordinate", Array => "array" });
keywords!(Field {
    Real => "real",
    Integer => "integer",
    Complex => "complex",
    Pattern => "pattern",
});
keywords!(Symmetry {
    General => "general",
    Symmetric => "symmetric",
    SkewSymmetric => "skew-symmetric",
    Hermitian => "hermitian",
});

/// Decoded banner of a Matrix Market file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Typecode {
    pub object: Object,
    pub format: Format,
    pub field: Field,
    pub symmetry: Symmetry,
}

impl Typecode {
    /// Parses a banner line.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Banner`] if the line is not a banner or contains
    /// an unknown keyword.
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        let mut words = line.split_whitespace();

        match words.next() {
            Some(prefix) if prefix.eq_ignore_ascii_case(BANNER) => {}
            _ => {
                return Err(FormatError::Banner(format!(
                    "line does not start with {}",
                    BANNER
                )))
            }
        }

        let words: Vec<String> = words.map(str::to_ascii_lowercase).collect();
        if words.len() < 3 || words.len() > 4 {
            return Err(FormatError::Banner(format!(
                "expected 3 or 4 keywords, found {}",
                words.len()
            )));
        }

        let unknown = |word: &str| FormatError::Banner(format!("unknown keyword {:?}", word));

        let object = Object::from_keyword(&words[0]).ok_or_else(|| unknown(&words[0]))?;
        let format = Format::from_keyword(&words[1]).ok_or_else(|| unknown(&words[1]))?;
        let field = Field::from_keyword(&words[2]).ok_or_else(|| unknown(&words[2]))?;
        let symmetry = match words.get(3) {
            Some(word) => Symmetry::from_keyword(word).ok_or_else(|| unknown(word))?,
            None => Symmetry::General,
        };

        Ok(Self {
            object,
            format,
            field,
            symmetry,
        })
    }

    pub fn is_matrix(&self) -> bool {
        self.object == Object::Matrix
    }

    pub fn is_coordinate(&self) -> bool {
        self.format == Format::Coordinate
    }

    pub fn is_real(&self) -> bool {
        self.field == Field::Real
    }

    pub fn is_integer(&self) -> bool {
        self.field == Field::Integer
    }

    pub fn is_pattern(&self) -> bool {
        self.field == Field::Pattern
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetry == Symmetry::Symmetric
    }

    /// Coordinate matrix of real, integer or pattern values, general or symmetric
    pub fn is_supported(&self) -> bool {
        self.is_matrix()
            && self.is_coordinate()
            && (self.is_real() || self.is_integer() || self.is_pattern())
            && matches!(self.symmetry, Symmetry::General | Symmetry::Symmetric)
    }
}

impl fmt::Display for Typecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            BANNER,
            self.object.as_str(),
            self.format.as_str(),
            self.field.as_str(),
            self.symmetry.as_str()
        )
    }
}
