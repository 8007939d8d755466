use std::fmt;

/// One of the seven Roman numeral symbols.
///
/// Variants are declared in ascending order of magnitude. The discriminant
/// indexes [`TABLE`], so the declaration order and the table order must agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Numeral {
    /// `I`, one.
    I,
    /// `V`, five.
    V,
    /// `X`, ten.
    X,
    /// `L`, fifty.
    L,
    /// `C`, one hundred.
    C,
    /// `D`, five hundred.
    D,
    /// `M`, one thousand.
    M,
}

/// A row of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// The upper-case letter that spells the numeral.
    pub symbol: char,
    /// Ordinal position by magnitude, `1` for `I` up to `7` for `M`.
    pub rank:   u8,
    /// Integer value of the numeral.
    pub value:  u16,
}

/// The fixed symbol table, indexed by [`Numeral`] discriminant.
pub static TABLE: [Entry; 7] = [Entry { symbol: 'I',
                                        rank:   1,
                                        value:  1, },
                                Entry { symbol: 'V',
                                        rank:   2,
                                        value:  5, },
                                Entry { symbol: 'X',
                                        rank:   3,
                                        value:  10, },
                                Entry { symbol: 'L',
                                        rank:   4,
                                        value:  50, },
                                Entry { symbol: 'C',
                                        rank:   5,
                                        value:  100, },
                                Entry { symbol: 'D',
                                        rank:   6,
                                        value:  500, },
                                Entry { symbol: 'M',
                                        rank:   7,
                                        value:  1000, }];

impl Numeral {
    /// Every numeral, smallest first.
    pub const ALL: [Self; 7] = [Self::I, Self::V, Self::X, Self::L, Self::C, Self::D, Self::M];

    /// Returns this numeral's row of the symbol table.
    #[must_use]
    pub fn entry(self) -> &'static Entry {
        &TABLE[self as usize]
    }

    /// Returns the rank of the numeral, from `1` (`I`) to `7` (`M`).
    ///
    /// # Example
    /// ```
    /// use romanum::converter::numeral::Numeral;
    ///
    /// assert_eq!(Numeral::I.rank(), 1);
    /// assert_eq!(Numeral::M.rank(), 7);
    /// ```
    #[must_use]
    pub fn rank(self) -> u8 {
        self.entry().rank
    }

    /// Returns the integer value of the numeral.
    ///
    /// # Example
    /// ```
    /// use romanum::converter::numeral::Numeral;
    ///
    /// assert_eq!(Numeral::L.value(), 50);
    /// ```
    #[must_use]
    pub fn value(self) -> u16 {
        self.entry().value
    }

    /// Returns the letter that spells the numeral.
    #[must_use]
    pub fn symbol(self) -> char {
        self.entry().symbol
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Resolves a character to its numeral.
///
/// Only the seven upper-case letters are accepted; everything else, lower-case
/// letters included, yields `None`.
///
/// # Example
/// ```
/// use romanum::converter::numeral::{Numeral, lookup};
///
/// assert_eq!(lookup('X'), Some(Numeral::X));
/// assert_eq!(lookup('x'), None);
/// assert_eq!(lookup('7'), None);
/// ```
#[must_use]
pub fn lookup(symbol: char) -> Option<Numeral> {
    Numeral::ALL.into_iter().find(|numeral| numeral.symbol() == symbol)
}
