//! Typed construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragments** ([§ 4.1 Structure](https://www.w3.org/TR/selectors-4/#structure))
//!   - element, id, class, attribute, pseudo-class, and pseudo-element
//!     pieces, each stored in its final textual form (`#main`, `.editable`,
//!     `[href]`)
//!
//! - **Ordered builder** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - appends validated incrementally against the fixed stage order
//!     (element, id, class, attribute, pseudo-class, pseudo-element)
//!   - at-most-once enforcement for element, id, and pseudo-element
//!
//! - **Combination** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - joining two built selectors with a descendant, child, next-sibling,
//!     or subsequent-sibling combinator, by copy
//!
//! - **Specificity** ([§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Implemented
//!
//! - Parsing existing selector strings
//! - Validation of attribute or pseudo-class argument syntax (arguments
//!   are emitted verbatim)
//! - Selector matching against a document tree

/// Incremental builder over validated fragments.
pub mod builder;
/// Builder validation errors.
pub mod error;
/// Fragment kinds, formatting, and combinators.
pub mod fragment;
/// Specificity per [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

// Re-exports for convenience
pub use builder::SelectorBuilder;
pub use error::SelectorError;
pub use fragment::{Combinator, Fragment, FragmentKind};
pub use specificity::Specificity;

/// Start a selector with an element (type) fragment.
///
/// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
///
/// # Example
/// ```
/// use quoll_selector::element;
///
/// assert_eq!(element("div").stringify(), "div");
/// ```
#[must_use]
pub fn element(name: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::element(name))
}

/// Start a selector with an id fragment (`#value`).
///
/// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::id(value))
}

/// Start a selector with a class fragment (`.value`).
///
/// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::class(value))
}

/// Start a selector with an attribute fragment (`[value]`).
///
/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::attr(value))
}

/// Start a selector with a pseudo-class fragment (`:value`).
///
/// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::pseudo_class(value))
}

/// Start a selector with a pseudo-element fragment (`::value`).
///
/// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::seeded(Fragment::pseudo_element(value))
}

/// Combine two already-built selectors with a combinator.
///
/// Equivalent to [`SelectorBuilder::combine`]; both operands are copied,
/// never aliased.
///
/// # Example
/// ```
/// use quoll_selector::{Combinator, combine, element};
///
/// let list = element("ul");
/// let item = element("li");
/// assert_eq!(
///     combine(&list, Combinator::Child, &item).stringify(),
///     "ul > li",
/// );
/// ```
#[must_use]
pub fn combine(
    a: &SelectorBuilder,
    combinator: Combinator,
    b: &SelectorBuilder,
) -> SelectorBuilder {
    a.combine(combinator, b)
}
