//! The worked end-to-end example: two literal parsers wired together over
//! the input "foofoo", driven through the public API only.

use seqcomb::{AMapExt, ByteCursor, MapExt, Parser, ThenExt, is_string, pure};
use std::borrow::Cow;

#[test]
fn literal_matcher_exactness() {
    let data = b"foofoo";
    let cursor = ByteCursor::new(data);

    let (cursor, value) = is_string("foo").parse(cursor).unwrap().into_parts();
    assert_eq!(value, "foo");
    assert_eq!(cursor.remaining(), b"foo");
    assert_eq!(cursor.position(), 3);
}

#[test]
fn literal_matcher_rejects_other_input() {
    let data = b"bar";
    let cursor = ByteCursor::new(data);

    assert!(is_string("foo").parse(cursor).is_err());
    assert_eq!(cursor.remaining(), b"bar");
    assert_eq!(cursor.position(), 0);
}

#[test]
fn sequencing_two_foos_with_then() {
    let data = b"foofoo";
    let cursor = ByteCursor::new(data);

    let parser = is_string("foo")
        .then(|first| is_string("foo").map(move |second| format!("{}{}", first, second)));

    let (cursor, value) = parser.parse(cursor).unwrap().into_parts();
    assert_eq!(value, "foofoo");
    assert_eq!(cursor.remaining(), b"");
    assert_eq!(cursor.position(), 6);
}

#[test]
fn sequencing_two_foos_with_amap() {
    let data = b"foofoo";
    let cursor = ByteCursor::new(data);

    let second = is_string("foo")
        .map(|b| move |a: Cow<'static, str>| (a.into_owned(), b.into_owned()));
    let parser = is_string("foo").amap(second);

    let (cursor, pair) = parser.parse(cursor).unwrap().into_parts();
    assert_eq!(pair, ("foo".to_string(), "foo".to_string()));
    assert!(cursor.at_end());
    assert_eq!(cursor.position(), 6);
}

#[test]
fn pure_consumes_nothing() {
    let data = b"anything";
    let cursor = ByteCursor::new(data);

    let parser = pure::<u8, _, seqcomb::SeqcombError<'_>>(42);
    let (out_cursor, value) = parser.parse(cursor).unwrap().into_parts();

    assert_eq!(value, 42);
    assert_eq!(out_cursor, cursor);
}

#[test]
fn sequencing_fails_when_second_foo_is_missing() {
    let data = b"foobar";
    let cursor = ByteCursor::new(data);

    let parser = is_string("foo").then(|_| is_string("foo"));
    let err = parser.parse(cursor).unwrap_err();

    // The error points into the second half of the input
    assert_eq!(err.position(), 3);
    assert_eq!(cursor.position(), 0);
}
