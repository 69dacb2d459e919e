use chrono::NaiveDate;

use super::common::*;
use crate::decision::{PersonalCode, PersonalCodeError, Sex};

#[test]
fn parses_reference_applicants() {
    for raw in [DEBTOR, SEGMENT_1, SEGMENT_2, SEGMENT_3] {
        let code = PersonalCode::parse(raw).expect("reference code is valid");
        assert_eq!(code.to_string(), raw);
        assert_eq!(
            code.birth_date(),
            NaiveDate::from_ymd_opt(1990, 2, 1).expect("valid date")
        );
        assert_eq!(code.sex(), Sex::Female);
    }
}

#[test]
fn derives_century_and_sex_from_first_digit() {
    let code = PersonalCode::parse(UNDERAGE).expect("valid code");
    assert_eq!(
        code.birth_date(),
        NaiveDate::from_ymd_opt(2008, 3, 25).expect("valid date")
    );
    assert_eq!(code.sex(), Sex::Male);

    let code = PersonalCode::parse(OVERAGE).expect("valid code");
    assert_eq!(
        code.birth_date(),
        NaiveDate::from_ymd_opt(1958, 3, 25).expect("valid date")
    );
}

#[test]
fn age_counts_completed_years() {
    let code = PersonalCode::parse(EXACTLY_MINIMUM_AGE).expect("valid code");
    let birthday = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    let eve = NaiveDate::from_ymd_opt(2025, 5, 31).expect("valid date");

    assert_eq!(code.age_on(birthday), 18);
    assert_eq!(code.age_on(eve), 17);
    assert_eq!(code.age_on(NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid")), 0);
}

#[test]
fn trims_surrounding_whitespace() {
    let code: PersonalCode = " 49002010976\n".parse().expect("trimmed code parses");
    assert_eq!(code.as_string(), SEGMENT_1);
}

#[test]
fn rejects_malformed_codes() {
    assert_eq!(
        PersonalCode::parse("4900201096"),
        Err(PersonalCodeError::InvalidLength(10))
    );
    assert_eq!(
        PersonalCode::parse("4900201096X"),
        Err(PersonalCodeError::NonDigit)
    );
    assert_eq!(
        PersonalCode::parse("79002010968"),
        Err(PersonalCodeError::InvalidCenturyMarker(7))
    );
    assert_eq!(
        PersonalCode::parse("49013010963"),
        Err(PersonalCodeError::InvalidBirthDate)
    );
    assert_eq!(
        PersonalCode::parse("49002300965"),
        Err(PersonalCodeError::InvalidBirthDate)
    );
    assert_eq!(
        PersonalCode::parse("12345678901"),
        Err(PersonalCodeError::InvalidBirthDate)
    );
}

#[test]
fn check_digit_is_not_enforced() {
    for raw in [UNDERAGE, OVERAGE, "49002010966"] {
        assert!(
            PersonalCode::parse(raw).is_ok(),
            "{raw} is well formed and should parse"
        );
    }
}

#[test]
fn trailing_number_reads_serial_and_check_digit() {
    let code = PersonalCode::parse(EXACTLY_MAXIMUM_AGE).expect("valid code");
    assert_eq!(code.trailing_number(4), 8009);
    assert_eq!(code.trailing_number(2), 9);
}
