//! Incremental, validated construction of selector strings.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use core::fmt;

use crate::error::SelectorError;
use crate::fragment::{Combinator, Fragment, FragmentKind};
use crate::specificity::Specificity;

/// Accumulates ordered selector fragments and renders them to a string.
///
/// Two invariants are enforced on every append:
/// - the non-combinator fragment kinds, read left to right, are
///   non-decreasing under the fixed rank order (element, id, class,
///   attribute, pseudo-class, pseudo-element);
/// - element, id, and pseudo-element fragments appear at most once.
///
/// A rejected append leaves the builder exactly as it was, so a caller may
/// recover by appending something valid instead.
///
/// # Example
/// ```
/// use quoll_selector::element;
///
/// let mut selector = element("a");
/// let _ = selector.id("main")?.class("x")?;
/// assert_eq!(selector.stringify(), "a#main.x");
/// # Ok::<(), quoll_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Insertion order = emission order.
    fragments: Vec<Fragment>,
    /// Singleton tracking: an element fragment was appended.
    used_element: bool,
    /// Singleton tracking: an id fragment was appended.
    used_id: bool,
    /// Singleton tracking: a pseudo-element fragment was appended.
    used_pseudo_element: bool,
}

impl SelectorBuilder {
    /// Create a builder with no fragments; it renders as `""`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            used_element: false,
            used_id: false,
            used_pseudo_element: false,
        }
    }

    /// Create a builder holding a single, already-formatted fragment.
    pub(crate) fn seeded(fragment: Fragment) -> Self {
        let mut builder = Self::new();
        builder.mark_used(fragment.kind);
        builder.fragments.push(fragment);
        builder
    }

    /// Append an element (type) fragment; the name is emitted verbatim.
    ///
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if this builder already holds an
    /// element fragment; [`SelectorError::OutOfOrder`] if any present
    /// fragment outranks the element stage.
    pub fn element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.push_checked(Fragment::element(name))?;
        Ok(self)
    }

    /// Append an id fragment (`#value`).
    ///
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if this builder already holds an id
    /// fragment; [`SelectorError::OutOfOrder`] if any present fragment
    /// outranks the id stage.
    pub fn id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push_checked(Fragment::id(value))?;
        Ok(self)
    }

    /// Append a class fragment (`.value`). Classes may repeat.
    ///
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any present fragment outranks the
    /// class stage.
    pub fn class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push_checked(Fragment::class(value))?;
        Ok(self)
    }

    /// Append an attribute fragment (`[value]`). Attributes may repeat,
    /// and the expression between the brackets is not validated.
    ///
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any present fragment outranks the
    /// attribute stage.
    pub fn attr(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push_checked(Fragment::attr(value))?;
        Ok(self)
    }

    /// Append a pseudo-class fragment (`:value`). Pseudo-classes may
    /// repeat.
    ///
    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any present fragment outranks the
    /// pseudo-class stage.
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push_checked(Fragment::pseudo_class(value))?;
        Ok(self)
    }

    /// Append a pseudo-element fragment (`::value`).
    ///
    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if this builder already holds a
    /// pseudo-element fragment. The order check cannot fail here: nothing
    /// outranks the pseudo-element stage.
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push_checked(Fragment::pseudo_element(value))?;
        Ok(self)
    }

    /// Render the accumulated fragments, in order, with no separator.
    ///
    /// Pure and idempotent; a builder with no fragments renders `""`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Combine two selectors with a combinator into a fresh builder.
    ///
    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// The result owns copies of both operands' fragments with one
    /// combinator fragment between them. Neither operand is modified, and
    /// later appends to an operand never show up in the combined result
    /// (nor the other way around).
    ///
    /// Combination is a structural concatenation, not a continuation of
    /// either operand's validation context: the result's singleton
    /// tracking starts fresh, and no ordering check is re-applied to the
    /// concatenated sequence. A later append onto the result is validated
    /// against the entire concatenated history.
    #[must_use]
    pub fn combine(&self, combinator: Combinator, other: &Self) -> Self {
        let mut fragments =
            Vec::with_capacity(self.fragments.len() + other.fragments.len() + 1);
        fragments.extend(self.fragments.iter().cloned());
        fragments.push(Fragment::combinator(combinator));
        fragments.extend(other.fragments.iter().cloned());
        Self {
            fragments,
            used_element: false,
            used_id: false,
            used_pseudo_element: false,
        }
    }

    /// Specificity of the accumulated fragments.
    ///
    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    /// "count the number of ID selectors in the selector (= A)... class
    /// selectors, attributes selectors, and pseudo-classes (= B)... type
    /// selectors and pseudo-elements (= C)"
    ///
    /// Combinator fragments contribute nothing.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        for fragment in &self.fragments {
            match fragment.kind {
                FragmentKind::Id => spec.0 += 1,
                FragmentKind::Class | FragmentKind::Attribute | FragmentKind::PseudoClass => {
                    spec.1 += 1;
                }
                FragmentKind::Element | FragmentKind::PseudoElement => spec.2 += 1,
                FragmentKind::Combinator => {}
            }
        }
        spec
    }

    /// The accumulated fragments, in emission order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments appended so far, combinators included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if no fragments have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Validate and append one fragment; on error nothing changes.
    ///
    /// The duplicate check runs first, then the order check scans all
    /// present fragments (combinators are rankless and skipped) for one
    /// that outranks the incoming kind. Scanning the whole sequence rather
    /// than the last fragment matters after [`Self::combine`], where a new
    /// append must be validated against the entire concatenated history.
    fn push_checked(&mut self, fragment: Fragment) -> Result<(), SelectorError> {
        let kind = fragment.kind;
        if kind.is_singleton() && self.singleton_used(kind) {
            return Err(SelectorError::DuplicatePart(kind));
        }
        let outranking = kind.rank().and_then(|rank| self.first_outranking(rank));
        if let Some(after) = outranking {
            return Err(SelectorError::OutOfOrder { kind, after });
        }
        self.mark_used(kind);
        self.fragments.push(fragment);
        Ok(())
    }

    /// Whether the singleton slot for `kind` is already taken.
    const fn singleton_used(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.used_element,
            FragmentKind::Id => self.used_id,
            FragmentKind::PseudoElement => self.used_pseudo_element,
            _ => false,
        }
    }

    /// First present kind whose rank strictly exceeds `rank`, if any.
    fn first_outranking(&self, rank: u8) -> Option<FragmentKind> {
        self.fragments
            .iter()
            .find(|fragment| matches!(fragment.kind.rank(), Some(present) if present > rank))
            .map(|fragment| fragment.kind)
    }

    /// Record that a singleton kind has been used; other kinds are no-ops.
    fn mark_used(&mut self, kind: FragmentKind) {
        match kind {
            FragmentKind::Element => self.used_element = true,
            FragmentKind::Id => self.used_id = true,
            FragmentKind::PseudoElement => self.used_pseudo_element = true,
            _ => {}
        }
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(&fragment.text)?;
        }
        Ok(())
    }
}
