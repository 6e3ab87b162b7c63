//! Property tests for the field format checks.

use club_admin::domain::validation::{Format, MATCH_RESULTS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_eleven_digits_is_an_oib(oib in "[0-9]{11}") {
        prop_assert!(Format::Oib.matches(&oib));
    }

    #[test]
    fn other_digit_counts_are_not_an_oib(oib in "[0-9]{1,10}|[0-9]{12,16}") {
        prop_assert!(!Format::Oib.matches(&oib));
    }

    #[test]
    fn digit_runs_pass_digits(value in "[0-9]{1,20}") {
        prop_assert!(Format::Digits.matches(&value));
    }

    #[test]
    fn any_letter_fails_digits(prefix in "[0-9]{0,5}", letter in "[a-zA-Z]", suffix in "[0-9]{0,5}") {
        let value = format!("{prefix}{letter}{suffix}");
        prop_assert!(!Format::Digits.matches(&value));
    }

    #[test]
    fn decimals_accept_one_separator(whole in "[0-9]{1,8}", sep in "[.,]", frac in "[0-9]{0,4}") {
        let value = format!("{whole}{sep}{frac}");
        prop_assert!(Format::Decimal.matches(&value));
    }

    #[test]
    fn decimals_reject_two_separators(a in "[0-9]{1,4}", b in "[0-9]{1,4}", c in "[0-9]{1,4}") {
        let value = format!("{a}.{b}.{c}");
        prop_assert!(!Format::Decimal.matches(&value));
    }

    #[test]
    fn simple_addresses_pass_email(user in "[a-z0-9._]{1,12}", host in "[a-z0-9]{1,12}", tld in "[a-z]{2,6}") {
        let value = format!("{user}@{host}.{tld}");
        prop_assert!(Format::Email.matches(&value));
    }

    #[test]
    fn results_outside_the_table_are_rejected(a in 0u8..10, b in 0u8..10) {
        let value = format!("{a}-{b}");
        prop_assert_eq!(
            Format::MatchResult.matches(&value),
            MATCH_RESULTS.contains(&value.as_str())
        );
    }
}
