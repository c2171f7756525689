use std::env::temp_dir;
use std::fs;
use std::io::{Cursor, SeekFrom};

use heph_message::body::{IoStream, MemoryStream, Metadata, Mode, Stream, StreamError};

#[test]
fn memory_stream_read() {
    let mut stream = MemoryStream::from("Hello world");
    assert!(stream.is_readable());
    assert!(stream.is_writable());
    assert!(stream.is_seekable());
    assert_eq!(stream.size(), Some(11));
    assert!(!stream.eof());

    assert_eq!(stream.read(5).unwrap(), b"Hello");
    assert_eq!(stream.tell().unwrap(), 5);
    assert!(!stream.eof());
    assert_eq!(stream.read(100).unwrap(), b" world");
    assert!(stream.eof());
    assert_eq!(stream.read(100).unwrap(), b"");

    stream.rewind().unwrap();
    assert!(!stream.eof());
    assert_eq!(stream.contents().unwrap(), b"Hello world");
    assert!(stream.eof());
}

#[test]
fn memory_stream_write() {
    let mut stream = MemoryStream::default();
    assert_eq!(stream.size(), Some(0));
    assert_eq!(stream.write(b"Hello").unwrap(), 5);
    assert_eq!(stream.write(b" world").unwrap(), 6);
    assert_eq!(stream.size(), Some(11));
    assert_eq!(stream.tell().unwrap(), 11);

    assert_eq!(stream.seek(SeekFrom::Start(6)).unwrap(), 6);
    assert_eq!(stream.contents().unwrap(), b"world");
    stream.rewind().unwrap();
    assert_eq!(stream.contents().unwrap(), b"Hello world");
}

#[test]
fn size_keeps_position() {
    let mut stream = MemoryStream::from(vec![1, 2, 3, 4]);
    assert_eq!(stream.read(2).unwrap(), [1, 2]);
    assert_eq!(stream.size(), Some(4));
    assert_eq!(stream.tell().unwrap(), 2);
    assert_eq!(stream.read(2).unwrap(), [3, 4]);
}

#[test]
fn detach() {
    let mut stream = MemoryStream::from("abc");
    let cursor = stream.detach().unwrap();
    assert_eq!(cursor.into_inner(), b"abc");

    assert!(!stream.is_readable());
    assert!(!stream.is_writable());
    assert!(!stream.is_seekable());
    assert!(stream.eof());
    assert_eq!(stream.size(), None);
    assert!(matches!(stream.read(1), Err(StreamError::Detached)));
    assert!(matches!(stream.write(b"a"), Err(StreamError::Detached)));
    assert!(matches!(stream.seek(SeekFrom::Start(0)), Err(StreamError::Detached)));
    assert!(matches!(stream.tell(), Err(StreamError::Detached)));
    assert!(matches!(stream.contents(), Err(StreamError::Detached)));
    // Detaching or closing again is fine.
    assert!(stream.detach().is_none());
    stream.close().unwrap();
}

#[test]
fn close() {
    let mut stream = MemoryStream::from("abc");
    stream.close().unwrap();
    assert!(matches!(stream.read(1), Err(StreamError::Detached)));
    assert!(stream.metadata().detached);
}

#[test]
fn metadata() {
    let stream = MemoryStream::default();
    assert_eq!(
        stream.metadata(),
        Metadata {
            mode: Mode::MEMORY,
            seekable: true,
            detached: false,
        }
    );
}

#[test]
fn read_only_stream() {
    let mode = "r".parse().unwrap();
    let mut stream = IoStream::new(Cursor::new(b"abc".to_vec()), mode);
    assert!(stream.is_readable());
    assert!(!stream.is_writable());
    assert!(matches!(stream.write(b"a"), Err(StreamError::NotWritable)));
    assert_eq!(stream.contents().unwrap(), b"abc");
}

#[test]
fn read_everything() {
    let mut stream = MemoryStream::from("abc");
    assert_eq!(stream.read(usize::MAX).unwrap(), b"abc");
    assert!(stream.eof());

    let data = vec![b'a'; 100 * 1024];
    let mut stream = MemoryStream::from(data.clone());
    assert_eq!(stream.read(usize::MAX).unwrap(), data);
}

#[test]
fn closed_stream_reports_detached_before_mode() {
    let mut stream = IoStream::new(Cursor::new(b"abc".to_vec()), "r".parse().unwrap());
    stream.close().unwrap();
    assert!(matches!(stream.write(b"a"), Err(StreamError::Detached)));

    let mut stream = IoStream::new(Cursor::new(Vec::new()), "w".parse().unwrap());
    stream.close().unwrap();
    assert!(matches!(stream.read(1), Err(StreamError::Detached)));
    assert!(matches!(stream.contents(), Err(StreamError::Detached)));
}

#[test]
fn write_only_stream() {
    let mode = "w".parse().unwrap();
    let mut stream = IoStream::new(Cursor::new(Vec::new()), mode);
    assert!(!stream.is_readable());
    assert!(stream.is_writable());
    assert!(matches!(stream.read(1), Err(StreamError::NotReadable)));
    assert!(matches!(stream.contents(), Err(StreamError::NotReadable)));
    assert_eq!(stream.write(b"abc").unwrap(), 3);
}

#[test]
fn append_stream() {
    let mode = "a+".parse().unwrap();
    let mut stream = IoStream::new(Cursor::new(b"abc".to_vec()), mode);
    stream.rewind().unwrap();
    // Always writes at the end.
    assert_eq!(stream.write(b"def").unwrap(), 3);
    stream.rewind().unwrap();
    assert_eq!(stream.contents().unwrap(), b"abcdef");
}

#[test]
fn modes() {
    let tests = &[
        ("r", true, false, "r"),
        ("r+", true, true, "r+"),
        ("rb", true, false, "r"),
        ("r+b", true, true, "r+"),
        ("w", false, true, "w"),
        ("w+", true, true, "w+"),
        ("wt", false, true, "w"),
        ("a", false, true, "a"),
        ("a+", true, true, "a+"),
        ("x", false, true, "x"),
        ("x+", true, true, "x+"),
        ("c", false, true, "c"),
        ("c+", true, true, "c+"),
    ];
    for (input, readable, writable, expected) in tests {
        let mode: Mode = input.parse().unwrap();
        assert_eq!(mode.is_readable(), *readable, "mode: {input}");
        assert_eq!(mode.is_writable(), *writable, "mode: {input}");
        assert_eq!(mode.to_string(), *expected);
    }
    assert_eq!(Mode::MEMORY.to_string(), "w+");
}

#[test]
fn invalid_modes() {
    for input in ["", "q", "+", "rw", "r++", "R", "b"] {
        match input.parse::<Mode>() {
            Err(StreamError::InvalidMode(got)) => assert_eq!(got, input),
            res => panic!("unexpected result for {input:?}: {res:?}"),
        }
    }
}

#[test]
fn file_stream() {
    let path = temp_dir().join("heph_message.file_stream.txt");
    _ = fs::remove_file(&path);

    let mut stream = IoStream::open(&path, "w+").unwrap();
    assert_eq!(stream.write(b"Hello world").unwrap(), 11);
    assert_eq!(stream.size(), Some(11));
    stream.rewind().unwrap();
    assert_eq!(stream.read(5).unwrap(), b"Hello");
    stream.close().unwrap();

    let mut stream = IoStream::open(&path, "a").unwrap();
    assert_eq!(stream.write(b"!").unwrap(), 1);
    stream.close().unwrap();

    let mut stream = IoStream::open(&path, "r").unwrap();
    assert_eq!(stream.contents().unwrap(), b"Hello world!");
    assert!(matches!(stream.write(b"a"), Err(StreamError::NotWritable)));

    // File already exists.
    assert!(matches!(IoStream::open(&path, "x"), Err(StreamError::Io(_))));
    assert!(matches!(IoStream::open(&path, "z"), Err(StreamError::InvalidMode(_))));

    fs::remove_file(&path).unwrap();
}

#[test]
fn stream_error_fmt_display() {
    assert_eq!(StreamError::Detached.to_string(), "stream is detached");
    assert_eq!(StreamError::NotReadable.to_string(), "stream is not readable");
    assert_eq!(StreamError::NotWritable.to_string(), "stream is not writable");
    assert_eq!(
        StreamError::InvalidMode("q".to_owned()).to_string(),
        "invalid stream mode: `q`"
    );
}
