//! Quoll CLI
//!
//! Composes a single CSS selector from typed command-line parts and prints
//! the rendered selector together with its specificity.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use quoll_selector::SelectorBuilder;

/// Compose a validated CSS selector from typed parts.
///
/// Parts are appended in their required order (element, id, classes,
/// attributes, pseudo-classes, pseudo-element), so a well-formed
/// invocation always yields a well-formed selector. Selector strings are
/// never parsed, only produced.
#[derive(Debug, Parser)]
#[command(name = "quoll", version, about)]
struct Args {
    /// Element (type) name, e.g. `div`.
    #[arg(long)]
    element: Option<String>,

    /// Id value, without the leading `#`.
    #[arg(long)]
    id: Option<String>,

    /// Class name, without the leading `.`; repeatable.
    #[arg(long = "class", value_name = "CLASS")]
    classes: Vec<String>,

    /// Attribute expression, without brackets (e.g. `href$=".png"`);
    /// repeatable.
    #[arg(long = "attr", value_name = "ATTR")]
    attrs: Vec<String>,

    /// Pseudo-class name, without the leading `:`; repeatable.
    #[arg(long = "pseudo-class", value_name = "NAME")]
    pseudo_classes: Vec<String>,

    /// Pseudo-element name, without the leading `::`.
    #[arg(long = "pseudo-element", value_name = "NAME")]
    pseudo_element: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut selector = SelectorBuilder::new();
    if let Some(name) = &args.element {
        let _ = selector.element(name)?;
    }
    if let Some(value) = &args.id {
        let _ = selector.id(value)?;
    }
    for value in &args.classes {
        let _ = selector.class(value)?;
    }
    for value in &args.attrs {
        let _ = selector.attr(value)?;
    }
    for value in &args.pseudo_classes {
        let _ = selector.pseudo_class(value)?;
    }
    if let Some(name) = &args.pseudo_element {
        let _ = selector.pseudo_element(name)?;
    }

    let specificity = selector.specificity();
    println!("{}", selector.stringify().green());
    println!(
        "specificity: ({}, {}, {})",
        specificity.0, specificity.1, specificity.2
    );

    Ok(())
}
