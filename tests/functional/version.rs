use heph_message::Error;
use heph_message::Version::{self, *};

use crate::assert_size;

#[test]
fn size() {
    assert_size::<Version>(1);
}

#[test]
fn default() {
    assert_eq!(Version::default(), Http11);
}

#[test]
fn major() {
    let tests = &[(Http10, 1), (Http11, 1), (Http2, 2), (Http3, 3)];
    for (version, expected) in tests {
        assert_eq!(version.major(), *expected);
    }
}

#[test]
fn minor() {
    let tests = &[(Http10, 0), (Http11, 1), (Http2, 0), (Http3, 0)];
    for (version, expected) in tests {
        assert_eq!(version.minor(), *expected);
    }
}

#[test]
fn highest_minor() {
    let tests = &[(Http10, Http11), (Http11, Http11), (Http2, Http2), (Http3, Http3)];
    for (version, expected) in tests {
        assert_eq!(version.highest_minor(), *expected);
    }
}

#[test]
fn from_str() {
    let tests = &[
        (Http10, "HTTP/1.0"),
        (Http11, "HTTP/1.1"),
        (Http2, "HTTP/2"),
        (Http3, "HTTP/3"),
        (Http10, "1.0"),
        (Http11, "1.1"),
        (Http2, "2"),
        (Http2, "2.0"),
        (Http3, "3.0"),
    ];
    for (expected, input) in tests {
        let got: Version = input.parse().unwrap();
        assert_eq!(got, *expected);
        assert_eq!(Version::try_from(*input).unwrap(), *expected);
    }
}

#[test]
fn invalid_versions() {
    // NOTE: version (unlike most other types) is matched case-sensitive.
    for input in ["", "HTTP/1.2", "http/1.1", "HTTP/", "1", "HTTP/1.1 ", "HTTP/0.9"] {
        match input.parse::<Version>() {
            Err(Error::InvalidVersion(got)) => assert_eq!(got, input),
            res => panic!("unexpected result for {input:?}: {res:?}"),
        }
    }
}

#[test]
fn number() {
    let tests = &[(Http10, "1.0"), (Http11, "1.1"), (Http2, "2"), (Http3, "3")];
    for (version, expected) in tests {
        assert_eq!(version.number(), *expected);
        // Must round trip.
        assert_eq!(expected.parse::<Version>().unwrap(), *version);
    }
}

#[test]
fn as_str() {
    let tests = &[(Http10, "HTTP/1.0"), (Http11, "HTTP/1.1"), (Http2, "HTTP/2"), (Http3, "HTTP/3")];
    for (version, expected) in tests {
        assert_eq!(version.as_str(), *expected);
    }
}

#[test]
fn fmt_display() {
    let tests = &[(Http10, "HTTP/1.0"), (Http11, "HTTP/1.1"), (Http2, "HTTP/2"), (Http3, "HTTP/3")];
    for (version, expected) in tests {
        assert_eq!(*version.to_string(), **expected);
    }
}
