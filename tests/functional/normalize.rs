use heph_message::uri::normalize::{equivalent, normalize};
use heph_message::Uri;

#[test]
fn normalized_form() {
    let tests = &[
        ("HTTP://Example.COM", "http://example.com/"),
        ("http://example.com:80/a", "http://example.com/a"),
        ("http://example.com/%7euser/a%2fb", "http://example.com/~user/a%2Fb"),
        ("http://example.com/?b=2&a=1&b=1", "http://example.com/?a=1&b=2&b=1"),
        ("http://example.com/?q=%7e#%7e", "http://example.com/?q=~#~"),
        ("/a%41", "/aA"),
        ("relative", "relative"),
    ];
    for (input, expected) in tests {
        let uri = Uri::new(input).unwrap();
        assert_eq!(normalize(&uri), *expected, "input: {input}");
    }
}

#[test]
fn normalize_does_not_change_uri() {
    let uri = Uri::new("http://example.com/%7e?b&a").unwrap();
    let _ = normalize(&uri);
    assert_eq!(uri.to_string(), "http://example.com/%7e?b&a");
}

#[test]
fn equivalent_uris() {
    let tests = &[
        ("http://example.com:80/%7Ea", "http://EXAMPLE.com/~a"),
        ("https://example.com", "https://example.com:443/"),
        ("http://example.com/?a=1&b=2", "http://example.com/?b=2&a=1"),
        ("http://example.com/a%2f", "http://example.com/a%2F"),
    ];
    for (left, right) in tests {
        let left = Uri::new(left).unwrap();
        let right = Uri::new(right).unwrap();
        assert!(equivalent(&left, &right), "left: {left}, right: {right}");
        assert!(left.is_equivalent(&right), "left: {left}, right: {right}");
    }
}

#[test]
fn not_equivalent_uris() {
    let tests = &[
        ("http://example.com/a", "http://example.com/b"),
        ("http://example.com/a", "https://example.com/a"),
        ("http://example.com:8080/", "http://example.com/"),
        ("http://example.com/a%2Fb", "http://example.com/a/b"),
        ("http://example.com/?a=1", "http://example.com/?a=2"),
        ("http://example.com/?a=1&a=2", "http://example.com/?a=2&a=1"),
    ];
    for (left, right) in tests {
        let left = Uri::new(left).unwrap();
        let right = Uri::new(right).unwrap();
        assert!(!equivalent(&left, &right), "left: {left}, right: {right}");
    }
}
