//! Integration tests for selector construction, validation, and combination.

use quoll_selector::{
    Combinator, FragmentKind, SelectorBuilder, SelectorError, Specificity, attr, class, combine,
    element, id, pseudo_element,
};

// Rendering Tests

#[test]
fn test_element_id_class_concatenation() {
    let mut selector = element("a");
    let _ = selector.id("main").unwrap().class("x").unwrap();
    assert_eq!(selector.stringify(), "a#main.x");
}

#[test]
fn test_attribute_and_pseudo_class_concatenation() {
    let mut selector = element("a");
    let _ = selector
        .attr("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_all_six_stages_in_order() {
    let mut selector = element("input");
    let _ = selector
        .id("login")
        .unwrap()
        .class("wide")
        .unwrap()
        .attr("type=text")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(
        selector.stringify(),
        "input#login.wide[type=text]:focus::placeholder"
    );
}

#[test]
fn test_repeated_classes_are_allowed() {
    let mut selector = class("x");
    let _ = selector.class("y").unwrap();
    assert_eq!(selector.stringify(), ".x.y");
}

#[test]
fn test_repeated_attributes_and_pseudo_classes_are_allowed() {
    let mut selector = attr("data-kind=nav");
    let _ = selector
        .attr("href")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), "[data-kind=nav][href]:hover:focus");
}

#[test]
fn test_empty_builder_stringifies_to_empty() {
    let selector = SelectorBuilder::new();
    assert_eq!(selector.stringify(), "");
    assert!(selector.is_empty());
    assert_eq!(selector.len(), 0);
}

#[test]
fn test_stringify_is_idempotent() {
    let mut selector = element("ul");
    let _ = selector.class("nav").unwrap();
    assert_eq!(selector.stringify(), "ul.nav");
    assert_eq!(selector.stringify(), "ul.nav");
}

// Duplicate Enforcement Tests

#[test]
fn test_duplicate_element_is_rejected() {
    let mut selector = element("table");
    let result = selector.element("div");
    assert_eq!(
        result.unwrap_err(),
        SelectorError::DuplicatePart(FragmentKind::Element)
    );
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut selector = id("main");
    let result = selector.id("other");
    assert_eq!(
        result.unwrap_err(),
        SelectorError::DuplicatePart(FragmentKind::Id)
    );
}

#[test]
fn test_duplicate_pseudo_element_is_rejected() {
    let mut selector = pseudo_element("before");
    let result = selector.pseudo_element("after");
    assert_eq!(
        result.unwrap_err(),
        SelectorError::DuplicatePart(FragmentKind::PseudoElement)
    );
}

// Ordering Enforcement Tests

#[test]
fn test_id_after_class_is_rejected() {
    // class holds rank 3, so a later id (rank 2) is out of order.
    let mut selector = class("draggable");
    let result = selector.id("main");
    assert_eq!(
        result.unwrap_err(),
        SelectorError::OutOfOrder {
            kind: FragmentKind::Id,
            after: FragmentKind::Class,
        }
    );
}

#[test]
fn test_element_must_come_first() {
    let mut selector = id("main");
    let result = selector.element("div");
    assert_eq!(
        result.unwrap_err(),
        SelectorError::OutOfOrder {
            kind: FragmentKind::Element,
            after: FragmentKind::Id,
        }
    );
}

#[test]
fn test_class_after_pseudo_element_is_rejected() {
    let mut selector = pseudo_element("first-line");
    let result = selector.class("highlight");
    assert_eq!(
        result.unwrap_err(),
        SelectorError::OutOfOrder {
            kind: FragmentKind::Class,
            after: FragmentKind::PseudoElement,
        }
    );
}

#[test]
fn test_failed_append_leaves_builder_unchanged() {
    let mut selector = element("a");
    let _ = selector.class("btn").unwrap();

    assert!(selector.id("main").is_err());
    assert!(selector.element("div").is_err());
    assert_eq!(selector.stringify(), "a.btn");
    assert_eq!(selector.len(), 2);

    // The builder stays usable at any stage the order still permits.
    let _ = selector.pseudo_class("hover").unwrap();
    assert_eq!(selector.stringify(), "a.btn:hover");
}

// Combination Tests
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_with_next_sibling() {
    let mut left = element("div");
    let _ = left.id("main").unwrap();
    let mut right = element("table");
    let _ = right.id("data").unwrap();

    let combined = combine(&left, Combinator::NextSibling, &right);
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_combinator_rendering() {
    let list = element("ul");
    let item = element("li");

    assert_eq!(
        combine(&list, Combinator::Descendant, &item).stringify(),
        "ul li"
    );
    assert_eq!(
        combine(&list, Combinator::Child, &item).stringify(),
        "ul > li"
    );
    assert_eq!(
        combine(&list, Combinator::SubsequentSibling, &item).stringify(),
        "ul ~ li"
    );
}

#[test]
fn test_combine_of_combined_selectors() {
    let heading = element("h1");
    let paragraph = element("p");
    let emphasis = element("em");

    let pair = combine(&heading, Combinator::NextSibling, &paragraph);
    let nested = combine(&pair, Combinator::Descendant, &emphasis);
    assert_eq!(nested.stringify(), "h1 + p em");
}

#[test]
fn test_combine_copies_its_operands() {
    let mut left = element("div");
    let _ = left.id("main").unwrap();
    let mut right = element("table");
    let _ = right.id("data").unwrap();

    let combined = combine(&left, Combinator::NextSibling, &right);

    // Appending to the operands afterwards must not change the combined
    // result's text.
    let _ = left.class("wide").unwrap();
    let _ = right.class("striped").unwrap();
    assert_eq!(combined.stringify(), "div#main + table#data");

    // The operands keep their own, now-extended text.
    assert_eq!(left.stringify(), "div#main.wide");
    assert_eq!(right.stringify(), "table#data.striped");
}

#[test]
fn test_mutating_combined_result_leaves_operands_alone() {
    let left = element("header");
    let right = element("nav");

    let mut combined = combine(&left, Combinator::Child, &right);
    let _ = combined.class("open").unwrap();

    assert_eq!(combined.stringify(), "header > nav.open");
    assert_eq!(left.stringify(), "header");
    assert_eq!(right.stringify(), "nav");
}

#[test]
fn test_combine_resets_singleton_tracking() {
    // Both operands used their element slot, but combination is a
    // structural concatenation: the result's tracking starts fresh, and
    // the order check passes because no present fragment outranks an
    // element.
    let left = element("div");
    let right = element("p");

    let mut combined = combine(&left, Combinator::Descendant, &right);
    let _ = combined.element("em").unwrap();
    assert_eq!(combined.stringify(), "div pem");
}

#[test]
fn test_append_to_combined_builder_revalidates_whole_sequence() {
    // The right operand carries a class (rank 3), so an element append
    // onto the combined result is rejected against the entire
    // concatenated history, not just the newly-added tail.
    let left = element("div");
    let mut right = element("p");
    let _ = right.class("note").unwrap();

    let mut combined = combine(&left, Combinator::Child, &right);
    let result = combined.element("span");
    assert_eq!(
        result.unwrap_err(),
        SelectorError::OutOfOrder {
            kind: FragmentKind::Element,
            after: FragmentKind::Class,
        }
    );
    assert_eq!(combined.stringify(), "div > p.note");
}

// Specificity Tests
// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

#[test]
fn test_specificity_counts_fragment_kinds() {
    let mut selector = element("a");
    let _ = selector
        .id("main")
        .unwrap()
        .class("x")
        .unwrap()
        .attr("href")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_element("before")
        .unwrap();
    // 1 id, {class + attribute + pseudo-class} = 3, {element + pseudo-element} = 2
    assert_eq!(selector.specificity(), Specificity(1, 3, 2));
}

#[test]
fn test_specificity_ignores_combinators() {
    let mut left = element("div");
    let _ = left.id("main").unwrap();
    let mut right = element("table");
    let _ = right.id("data").unwrap();

    let combined = combine(&left, Combinator::NextSibling, &right);
    assert_eq!(combined.specificity(), Specificity(2, 0, 2));
}

#[test]
fn test_specificity_of_empty_builder_is_zero() {
    assert_eq!(SelectorBuilder::new().specificity(), Specificity::new(0, 0, 0));
}

// Error Display Tests

#[test]
fn test_duplicate_error_message_names_the_kind() {
    let mut selector = pseudo_element("before");
    let err = selector.pseudo_element("after").unwrap_err();
    assert_eq!(
        err.to_string(),
        "duplicate pseudo-element part: a selector may contain at most one pseudo-element"
    );
}

#[test]
fn test_order_error_message_names_both_kinds() {
    let mut selector = class("x");
    let err = selector.element("div").unwrap_err();
    assert_eq!(
        err.to_string(),
        "element part out of order: cannot follow a class part"
    );
}
