//! Common regex patterns for gift and hospitality extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// GBP amount: symbol, optional thousands separators, optional decimals.
/// The leading run is unbounded because unseparated amounts ("£5000")
/// appear in the register alongside separated ones.
pub const MONEY: &str = r"£\d+(?:,\d{3})*(?:\.\d+)?";

lazy_static! {
    pub static ref MONEY_PATTERN: Regex = Regex::new(MONEY).unwrap();

    // Explicit aggregate qualifiers: "total value £1,350" / "£1,350 in total"
    pub static ref TOTAL_VALUE: Regex =
        Regex::new(&format!(r"total value ({MONEY})")).unwrap();
    pub static ref IN_TOTAL: Regex =
        Regex::new(&format!(r"({MONEY}) in total")).unwrap();

    // The fixed six-field schema used by the published gift entries.
    pub static ref GIFT_SCHEMA: Regex = Regex::new(
        r"\AName of donor: (.*)\nAddress of donor: (.*)\nAmount of donation,? or nature and value if (?:donation|benefit) in kind: (.*)\nDate received: (.*)\nDate accepted: (.*)\nDonor status: (.*)"
    )
    .unwrap();

    // Compressed day range within one month: "3-5 October 2021"
    pub static ref DAY_RANGE: Regex =
        Regex::new(r"\A(\d{1,2})-(\d{1,2}) ([A-Z].+)\z").unwrap();

    // Generic two-endpoint range. The leading group is greedy, so the
    // split lands on the last separator, as the register text expects.
    pub static ref DATE_RANGE: Regex =
        Regex::new(r"\A(.+) (?:–|-|to) (.+)\z").unwrap();

    // Honorary club membership entries never fit the six-field schema.
    pub static ref HONORARY_MARKER: Regex =
        Regex::new(r"(?i)honorary (?:life )?membership").unwrap();
    pub static ref HONORARY_MEMBERSHIP: Regex = Regex::new(
        r"(?is)honorary (?:life )?membership of (?P<club>[^,.\n]+).*?accepted(?: on)? (?P<date>\d{1,2} [A-Z][a-z]+ \d{4})"
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_pattern_shapes() {
        for text in [
            "£5",
            "£500",
            "£5000",
            "£1,350",
            "£1,350.00",
            "£12,345,678.90",
        ] {
            let m = MONEY_PATTERN.find(text).unwrap();
            assert_eq!(m.as_str(), text);
        }
        assert!(MONEY_PATTERN.find("500 pounds").is_none());
    }

    #[test]
    fn test_gift_schema_captures_six_fields() {
        let entry = "Name of donor: Acme Ltd\n\
                     Address of donor: 1 Example Street, London\n\
                     Amount of donation or nature and value if benefit in kind: £1,350.00 (£225 per person)\n\
                     Date received: 3-5 October 2021\n\
                     Date accepted: 3 October 2021\n\
                     Donor status: company, registration 01234567";

        let caps = GIFT_SCHEMA.captures(entry).unwrap();
        assert_eq!(&caps[1], "Acme Ltd");
        assert_eq!(&caps[2], "1 Example Street, London");
        assert_eq!(&caps[3], "£1,350.00 (£225 per person)");
        assert_eq!(&caps[4], "3-5 October 2021");
        assert_eq!(&caps[5], "3 October 2021");
        assert_eq!(&caps[6], "company, registration 01234567");
    }

    #[test]
    fn test_date_range_splits_on_last_separator() {
        let caps = DATE_RANGE.captures("1 January 2021 to 3 January 2021").unwrap();
        assert_eq!(&caps[1], "1 January 2021");
        assert_eq!(&caps[2], "3 January 2021");
    }
}
