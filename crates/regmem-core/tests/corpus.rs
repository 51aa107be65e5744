//! End-to-end run of both pipelines over a small corpus fixture.

use pretty_assertions::assert_eq;
use regmem_core::models::register::{Register, EMPLOYMENT_SECTION, GIFTS_SECTION};
use regmem_core::{earnings, gifts, GiftParser};

const FIXTURE: &str = r#"{
  "First Member": {
    "1. Employment and earnings": [
      "8 December 2021, received £600 from the BBC, Broadcasting House. Hours: 4 hrs. (Registered 14 December 2021)",
      {
        "Payments from ComRes, Four Millbank, London SW1P 3JA:": [
          "14 July 2021, received £75. Hours: 1 hr. (Registered 20 July 2021)",
          "An irregular narrative payment note."
        ]
      }
    ],
    "3. Gifts, benefits and hospitality from UK sources": [
      "Name of donor: Acme Ltd\nAddress of donor: 1 Example Street, London\nAmount of donation or nature and value if benefit in kind: £1,350.00 (£225 per person)\nDate received: 3-5 October 2021\nDate accepted: 3 October 2021\nDonor status: company, registration 01234567\n(Registered 14 October 2021)"
    ]
  },
  "Second Member": {
    "3. Gifts, benefits and hospitality from UK sources": [
      "Honorary membership of the Carlton Club, accepted 5 July 2021.",
      "A story-shaped disclosure no rule will ever match."
    ],
    "9. Family members employed": [
      "Employs a family member as caseworker."
    ]
  }
}"#;

#[test]
fn test_full_run_over_fixture() {
    let register = Register::from_json(FIXTURE).unwrap();
    assert_eq!(register.members.len(), 2);

    // Earnings pipeline: one naked line, one heading, two subs.
    let report = earnings::run(&register);
    assert_eq!(report.naked.total, 1);
    assert_eq!(report.naked.success, 1);
    assert_eq!(report.heading.total, 1);
    assert_eq!(report.heading.success, 1);
    assert_eq!(report.sub.total, 2);
    assert_eq!(report.sub.success, 1);
    assert_eq!(
        report.sub.failures,
        vec!["An irregular narrative payment note."]
    );
    assert_eq!(report.total(), 4);
    assert_eq!(report.accepted(), 3);
    assert_eq!(report.success_rate(), 0.75);

    // Gift pipeline: one schema entry, one honorary membership, one
    // unrecoverable narrative. The unlisted section is never parsed.
    let parser = GiftParser::new().unwrap();
    let gift_report = gifts::run(&register, &parser);
    assert_eq!(gift_report.gifts.len(), 2);
    assert_eq!(
        gift_report.unparsed,
        vec!["A story-shaped disclosure no rule will ever match."]
    );

    let schema_gift = &gift_report.gifts[0];
    assert_eq!(schema_gift.donor_name, "Acme Ltd");
    assert_eq!(schema_gift.value.map(|v| v.to_string()), Some("1350.00".to_string()));

    let honorary = &gift_report.gifts[1];
    assert_eq!(honorary.donor_name, "the Carlton Club");
    assert_eq!(honorary.value, None);
}

#[test]
fn test_unknown_sections_not_dispatched() {
    let register = Register::from_json(FIXTURE).unwrap();
    let second = &register.members[1];
    assert!(second.section("9. Family members employed").is_some());
    assert!(second.section(EMPLOYMENT_SECTION).is_none());
    assert!(second.section(GIFTS_SECTION).is_some());

    // A register with only unknown sections yields empty reports, with
    // the degenerate NaN rate rather than an error.
    let other = Register::from_json(r#"{"M": {"5. Miscellaneous": ["x"]}}"#).unwrap();
    let report = earnings::run(&other);
    assert_eq!(report.total(), 0);
    assert!(report.success_rate().is_nan());
}
