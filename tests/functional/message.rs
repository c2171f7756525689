//! Tests for the [`HttpMessage`] methods shared by requests and responses.

use std::time::SystemTime;

use heph_message::body::Stream;
use heph_message::{Error, HeaderName, HttpMessage, MemoryStream, Request, Response, Version};

fn values(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

#[test]
fn default_version() {
    let response = Response::ok();
    assert_eq!(response.version(), Version::Http11);
    assert_eq!(response.protocol_version(), "1.1");
}

#[test]
fn with_version() {
    let response = Response::ok().with_version(Version::Http2);
    assert_eq!(response.version(), Version::Http2);
    assert_eq!(response.protocol_version(), "2");

    let request = Request::get("/").unwrap();
    let request = request.with_protocol_version("1.0").unwrap();
    assert_eq!(request.version(), Version::Http10);
    let request = request.with_protocol_version("HTTP/1.1").unwrap();
    assert_eq!(request.version(), Version::Http11);

    match Response::ok().with_protocol_version("1.2") {
        Err(Error::InvalidVersion(version)) => assert_eq!(version, "1.2"),
        res => panic!("unexpected result: {res:?}"),
    }
}

#[test]
fn with_header() {
    let response = Response::ok()
        .with_header("Content-Type", "text/plain")
        .unwrap();
    assert_eq!(response.header("content-type").to_vec(), values(&["text/plain"]));
    assert!(response.has_header("CONTENT-TYPE"));

    // Replaces the existing values.
    let response = response.with_header("content-type", ["a", "b"]).unwrap();
    assert_eq!(response.header_line("Content-Type"), "a, b");
    assert_eq!(response.headers().len(), 1);
}

#[test]
fn with_added_header() {
    let response = Response::ok()
        .with_header("Vary", "Accept")
        .and_then(|response| response.with_added_header("vary", "Accept-Encoding"))
        .and_then(|response| response.with_added_header("Cache-Control", "no-cache"))
        .unwrap();
    assert_eq!(
        response.header("Vary").to_vec(),
        values(&["Accept", "Accept-Encoding"])
    );
    assert_eq!(response.header_line("cache-control"), "no-cache");
}

#[test]
fn without_header() {
    let response = Response::ok()
        .with_header("X-A", "a")
        .and_then(|response| response.with_header("X-B", "b"))
        .unwrap()
        .without_header("x-a")
        .without_header("x-missing");
    assert!(!response.has_header("X-A"));
    assert!(response.has_header("X-B"));
}

#[test]
fn invalid_headers_are_rejected() {
    match Response::ok().with_header("Bad Name", "value") {
        Err(Error::InvalidHeaderName(name)) => assert_eq!(name, "Bad Name"),
        res => panic!("unexpected result: {res:?}"),
    }
    match Response::ok().with_added_header("X-A", "a\r\nb") {
        Err(Error::InvalidHeaderValue { name, value }) => {
            assert_eq!(name, "X-A");
            assert_eq!(value, "a\r\nb");
        }
        res => panic!("unexpected result: {res:?}"),
    }
}

#[test]
fn header_or() {
    let response = Response::ok()
        .with_header(HeaderName::CONTENT_LENGTH, "123")
        .and_then(|response| response.with_header("Date", "Thu, 01 Jan 1970 00:00:00 GMT"))
        .and_then(|response| response.with_header("X-Invalid", "abc"))
        .unwrap();
    assert_eq!(response.header_or("Content-Length", 0usize), 123);
    assert_eq!(response.header_or("X-Missing", 10usize), 10);
    assert_eq!(response.header_or("X-Invalid", 10usize), 10);
    assert_eq!(response.header_or("X-Invalid", "default"), "abc");
    assert_eq!(
        response.header_or_else("date", SystemTime::now),
        SystemTime::UNIX_EPOCH
    );
    assert_eq!(response.header_or_else("X-Missing", || 1u8), 1);
}

#[test]
fn default_body() {
    let mut response = Response::ok();
    assert!(!response.body().metadata().detached);
    assert_eq!(response.body_mut().contents().unwrap(), b"");
}

#[test]
fn with_body() {
    let mut request = Request::post("http://example.com/upload")
        .unwrap()
        .with_body(MemoryStream::from("Hello world"));
    assert_eq!(request.body_mut().contents().unwrap(), b"Hello world");

    let response = Response::ok().with_body("static body");
    assert_eq!(*response.body(), "static body");
    let response = response.map_body(str::len);
    assert_eq!(response.into_body(), 11);
}

#[test]
fn with_methods_copy() {
    let original = Response::ok().with_header("X-A", "a").unwrap();
    let updated = original.clone().with_header("X-A", "b").unwrap();
    assert_eq!(original.header_line("X-A"), "a");
    assert_eq!(updated.header_line("X-A"), "b");
}
