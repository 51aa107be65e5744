//! Per-category payment grammars and the line dispatcher.
//!
//! Each category owns one pest grammar whose top-level alternatives are
//! separate `*_form` rules. A line accepted by exactly one form parses
//! cleanly; acceptance by several forms is surfaced as an ambiguous
//! parse (a grammar weakness worth attention, counted separately and
//! never conflated with clean successes); acceptance by none is a
//! rejection.

use pest::Parser;
use pest_derive::Parser;

use super::classify::Category;

mod naked {
    use super::Parser;

    #[derive(Parser)]
    #[grammar = "earnings/payment.pest"]
    pub struct PaymentParser;
}

mod heading {
    use super::Parser;

    #[derive(Parser)]
    #[grammar = "earnings/payment_header.pest"]
    pub struct PaymentHeaderParser;
}

mod sub {
    use super::Parser;

    #[derive(Parser)]
    #[grammar = "earnings/payment_sub.pest"]
    pub struct PaymentSubParser;
}

/// Outcome of parsing one line against its category grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Exactly one form of the grammar accepts the line.
    Success,
    /// More than one form accepts the line.
    Ambiguous,
    /// No form accepts the line.
    Failure,
}

/// Parse a preprocessed line against the grammar for its category.
pub fn parse_line(category: Category, line: &str) -> ParseOutcome {
    let accepted = match category {
        Category::Naked => naked_forms(line),
        Category::Heading => heading_forms(line),
        Category::Sub => sub_forms(line),
    };
    match accepted {
        0 => ParseOutcome::Failure,
        1 => ParseOutcome::Success,
        _ => ParseOutcome::Ambiguous,
    }
}

fn naked_forms(line: &str) -> usize {
    use naked::{PaymentParser, Rule};
    [
        Rule::received_form,
        Rule::received_for_form,
        Rule::ongoing_form,
        Rule::fee_header_form,
    ]
    .into_iter()
    .filter(|rule| PaymentParser::parse(*rule, line).is_ok())
    .count()
}

fn heading_forms(line: &str) -> usize {
    use heading::{PaymentHeaderParser, Rule};
    [
        Rule::payments_from_form,
        Rule::source_address_form,
        Rule::service_for_form,
    ]
    .into_iter()
    .filter(|rule| PaymentHeaderParser::parse(*rule, line).is_ok())
    .count()
}

fn sub_forms(line: &str) -> usize {
    use sub::{PaymentSubParser, Rule};
    [
        Rule::received_form,
        Rule::received_for_form,
        Rule::received_on_form,
    ]
    .into_iter()
    .filter(|rule| PaymentSubParser::parse(*rule, line).is_ok())
    .count()
}
