use heph_message::{Error, StatusClass, StatusCode};

use crate::assert_size;

#[track_caller]
fn status(code: u16) -> StatusCode {
    StatusCode::new(code).unwrap()
}

#[test]
fn size() {
    assert_size::<StatusCode>(2);
}

#[test]
fn valid_codes() {
    for code in (100..=599).filter(|code| *code != 306) {
        assert!(StatusCode::is_valid(code), "code: {code}");
        assert_eq!(status(code).as_u16(), code);
        assert_eq!(u16::from(StatusCode::try_from(code).unwrap()), code);
    }
}

#[test]
fn invalid_codes() {
    for code in [0, 10, 99, 306, 600, 999, u16::MAX] {
        assert!(!StatusCode::is_valid(code), "code: {code}");
        match StatusCode::new(code) {
            Err(Error::InvalidStatusCode(got)) => assert_eq!(got, code),
            res => panic!("unexpected result for {code}: {res:?}"),
        }
    }
}

#[test]
fn class() {
    let tests = [
        (100, StatusClass::Informational),
        (199, StatusClass::Informational),
        (200, StatusClass::Successful),
        (299, StatusClass::Successful),
        (300, StatusClass::Redirection),
        (399, StatusClass::Redirection),
        (400, StatusClass::ClientError),
        (499, StatusClass::ClientError),
        (500, StatusClass::ServerError),
        (599, StatusClass::ServerError),
    ];
    for (code, expected) in tests {
        let status = status(code);
        assert_eq!(status.class(), expected, "code: {code}");
        assert_eq!(status.is_redirect(), expected == StatusClass::Redirection);
        assert_eq!(
            status.is_error(),
            matches!(expected, StatusClass::ClientError | StatusClass::ServerError)
        );
    }
}

#[test]
fn includes_body() {
    for code in [100, 101, 199, 204, 304] {
        assert!(!status(code).includes_body(), "code: {code}");
    }
    for code in [200, 205, 301, 305, 400, 500, 599] {
        assert!(status(code).includes_body(), "code: {code}");
    }
}

#[test]
fn phrase() {
    let tests = [
        (StatusCode::CONTINUE, "Continue"),
        (StatusCode::EARLY_HINTS, "Early Hints"),
        (StatusCode::OK, "OK"),
        (StatusCode::NON_AUTHORITATIVE_INFORMATION, "Non-Authoritative Information"),
        (StatusCode::IM_USED, "IM Used"),
        (StatusCode::SEE_OTHER, "See Other"),
        (StatusCode::PERMANENT_REDIRECT, "Permanent Redirect"),
        (StatusCode::CONTENT_TOO_LARGE, "Content Too Large"),
        (StatusCode::UNPROCESSABLE_CONTENT, "Unprocessable Content"),
        (StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS, "Unavailable For Legal Reasons"),
        (StatusCode::NETWORK_AUTHENTICATION_REQUIRED, "Network Authentication Required"),
    ];
    for (status_code, expected) in tests {
        assert_eq!(status_code.phrase(), Some(expected));
    }

    // Unregistered or invalid.
    for code in [199, 218, 306, 418, 599] {
        assert_eq!(StatusCode::new(code).ok().and_then(StatusCode::phrase), None);
    }
}

#[test]
fn cmp_with_u16() {
    assert!(StatusCode::OK == 200);
    assert!(StatusCode::BAD_REQUEST == 400);
    assert!(status(599) == 599);
    assert!(StatusCode::OK != 201);
}

#[test]
fn fmt_display() {
    assert_eq!(StatusCode::OK.to_string(), "200");
    assert_eq!(status(599).to_string(), "599");
}
