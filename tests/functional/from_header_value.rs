use std::fmt;
use std::time::{Duration, SystemTime};

use heph_message::header::{FromHeaderValue, ParseIntError, ParseTimeError};

#[test]
fn str() {
    test_parse("123", "123");
    test_parse("abc", "abc");
    test_parse("", "");
}

#[test]
fn integers() {
    test_parse("123", 123u8);
    test_parse("123", 123u16);
    test_parse("123", 123u32);
    test_parse("123", 123u64);
    test_parse("123", 123usize);

    test_parse("255", u8::MAX);
    test_parse("65535", u16::MAX);
    test_parse("4294967295", u32::MAX);
    test_parse("18446744073709551615", u64::MAX);
    test_parse("0", 0u8);
}

#[test]
fn integers_overflow() {
    // In multiplication.
    test_parse_fail::<u8>("300");
    test_parse_fail::<u16>("70000");
    test_parse_fail::<u32>("5000000000");
    test_parse_fail::<u64>("20000000000000000000");

    // In addition.
    test_parse_fail::<u8>("257");
    test_parse_fail::<u16>("65537");
    test_parse_fail::<u32>("4294967297");
    test_parse_fail::<u64>("18446744073709551616");
}

#[test]
fn empty_integers() {
    test_parse_fail::<u8>("");
    test_parse_fail::<u16>("");
    test_parse_fail::<u32>("");
    test_parse_fail::<u64>("");
    test_parse_fail::<usize>("");
}

#[test]
fn invalid_integers() {
    test_parse_fail::<u8>("abc");
    test_parse_fail::<u16>("abc");
    test_parse_fail::<u32>("abc");
    test_parse_fail::<u64>("abc");
    test_parse_fail::<usize>("abc");

    test_parse_fail::<u8>("2a");
    test_parse_fail::<u16>("-2");
    test_parse_fail::<u32>("+2");
    test_parse_fail::<u64>(" 2");
    test_parse_fail::<usize>("2 ");
}

#[test]
fn system_time() {
    test_parse("Thu, 01 Jan 1970 00:00:00 GMT", SystemTime::UNIX_EPOCH); // IMF-fixdate.
    test_parse("Thursday, 01-Jan-70 00:00:00 GMT", SystemTime::UNIX_EPOCH); // RFC 850.
    test_parse("Thu Jan  1 00:00:00 1970", SystemTime::UNIX_EPOCH); // ANSI C's `asctime`.
    test_parse(
        "Sun, 06 Nov 1994 08:49:37 GMT",
        SystemTime::UNIX_EPOCH + Duration::from_secs(784111777),
    );
}

#[test]
fn invalid_system_time() {
    test_parse_fail::<SystemTime>("");
    test_parse_fail::<SystemTime>("ABC, 01 Jan 1970 00:00:00 GMT"); // Invalid format.
}

#[track_caller]
fn test_parse<'a, T>(value: &'a str, expected: T)
where
    T: FromHeaderValue<'a> + fmt::Debug + PartialEq,
    <T as FromHeaderValue<'a>>::Err: fmt::Debug,
{
    assert_eq!(T::from_value(value).unwrap(), expected);
}

#[track_caller]
fn test_parse_fail<'a, T>(value: &'a str)
where
    T: FromHeaderValue<'a> + fmt::Debug + PartialEq,
    <T as FromHeaderValue<'a>>::Err: fmt::Debug,
{
    assert!(T::from_value(value).is_err());
}

#[test]
fn parse_int_error_fmt_display() {
    assert_eq!(ParseIntError.to_string(), "invalid integer");
}

#[test]
fn parse_time_error_fmt_display() {
    assert_eq!(ParseTimeError.to_string(), "invalid time");
}
