//! Selector fragments: the formatted pieces a selector string is built from.
//!
//! [§ 4.1 Structure and terminology](https://www.w3.org/TR/selectors-4/#structure)
//!
//! Each fragment stores its final textual form (`#main`, `.editable`,
//! `[href]`) together with the kind it was appended as. The kind decides
//! where the fragment may sit relative to the others and whether it may
//! repeat; the text is emitted verbatim when the selector is rendered.

use core::fmt;

use serde::Serialize;
use strum_macros::Display;

/// The kind of a selector fragment.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "If it contains a type selector or universal selector, that selector
/// must come first in the sequence."
///
/// Non-combinator kinds carry a fixed rank defining the required
/// left-to-right arrangement: element, id, class, attribute, pseudo-class,
/// pseudo-element. Combinator fragments are rankless punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value."
    ///
    /// Examples: `#main`, `#nav-bar`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.editable`, `.btn`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// The bracketed attribute expression, emitted verbatim.
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:first-child`
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    /// A relational token joining two selectors; carries no rank.
    Combinator,
}

impl FragmentKind {
    /// Rank in the fixed ordering, or `None` for combinator fragments.
    #[must_use]
    pub const fn rank(self) -> Option<u8> {
        match self {
            Self::Element => Some(1),
            Self::Id => Some(2),
            Self::Class => Some(3),
            Self::Attribute => Some(4),
            Self::PseudoClass => Some(5),
            Self::PseudoElement => Some(6),
            Self::Combinator => None,
        }
    }

    /// Returns true for kinds that may appear at most once per selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two
    /// compound selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two
    /// compound selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two
    /// compound selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The CSS punctuation for this combinator.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl fmt::Display for Combinator {
    /// Renders the token surrounded by single spaces; the descendant
    /// combinator, already whitespace, collapses to one space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descendant => f.write_str(" "),
            Self::Child | Self::NextSibling | Self::SubsequentSibling => {
                write!(f, " {} ", self.token())
            }
        }
    }
}

/// One formatted piece of a selector string, tagged with its kind for
/// ordering and uniqueness checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// The kind this fragment was appended as.
    pub kind: FragmentKind,
    /// The already-formatted text to emit (e.g. `#main`, ` + `).
    pub text: String,
}

impl Fragment {
    /// Create an element fragment; the name is stored verbatim.
    #[must_use]
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            kind: FragmentKind::Element,
            text: name.into(),
        }
    }

    /// Create an id fragment: `#` followed by the value.
    #[must_use]
    pub fn id(value: &str) -> Self {
        Self {
            kind: FragmentKind::Id,
            text: format!("#{value}"),
        }
    }

    /// Create a class fragment: `.` followed by the value.
    #[must_use]
    pub fn class(value: &str) -> Self {
        Self {
            kind: FragmentKind::Class,
            text: format!(".{value}"),
        }
    }

    /// Create an attribute fragment: the value wrapped in brackets.
    ///
    /// The expression between the brackets is not validated.
    #[must_use]
    pub fn attr(value: &str) -> Self {
        Self {
            kind: FragmentKind::Attribute,
            text: format!("[{value}]"),
        }
    }

    /// Create a pseudo-class fragment: `:` followed by the value.
    #[must_use]
    pub fn pseudo_class(value: &str) -> Self {
        Self {
            kind: FragmentKind::PseudoClass,
            text: format!(":{value}"),
        }
    }

    /// Create a pseudo-element fragment: `::` followed by the value.
    #[must_use]
    pub fn pseudo_element(value: &str) -> Self {
        Self {
            kind: FragmentKind::PseudoElement,
            text: format!("::{value}"),
        }
    }

    /// Create a combinator fragment from a typed combinator.
    #[must_use]
    pub fn combinator(combinator: Combinator) -> Self {
        Self {
            kind: FragmentKind::Combinator,
            text: combinator.to_string(),
        }
    }
}
