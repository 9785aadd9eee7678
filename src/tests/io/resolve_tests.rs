//! Tests for input classification.

use std::path::PathBuf;

use crate::error::{FailureKind, ProbeError};
use crate::io::{InputDescriptor, MemoryReader, ProbeInput, classify};
use crate::tests::fixtures;

#[tokio::test]
async fn existing_file_is_a_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.png");
    std::fs::write(&path, fixtures::png(1, 1)).unwrap();

    let text = path.to_string_lossy().into_owned();
    match classify(text.as_str().into()).await.unwrap() {
        InputDescriptor::FilePath(p) => assert_eq!(p, path),
        other => panic!("expected a file path, got {other:?}"),
    }

    match classify(path.clone().into()).await.unwrap() {
        InputDescriptor::FilePath(p) => assert_eq!(p, path),
        other => panic!("expected a file path, got {other:?}"),
    }
}

#[tokio::test]
async fn http_prefix_is_a_url() {
    for url in ["http://example.com/a.png", "https://example.com/b.jpg"] {
        match classify(url.into()).await.unwrap() {
            InputDescriptor::Url(u) => assert_eq!(u, url),
            other => panic!("expected a URL, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn base64_data_uri_keeps_payload() {
    let uri = fixtures::png_2x1_data_uri();
    match classify(uri.into()).await.unwrap() {
        InputDescriptor::DataUri { payload } => {
            assert_eq!(payload, fixtures::PNG_2X1_BASE64);
        }
        other => panic!("expected a data URI, got {other:?}"),
    }
}

#[tokio::test]
async fn data_uri_with_extra_parameters() {
    let uri = "data:image/gif;charset=binary;base64,R0lGODlh";
    match classify(uri.into()).await.unwrap() {
        InputDescriptor::DataUri { payload } => assert_eq!(payload, "R0lGODlh"),
        other => panic!("expected a data URI, got {other:?}"),
    }
}

#[tokio::test]
async fn unrecognized_inputs_are_invalid() {
    for text in [
        "",
        "/definitely/not/here.png",
        "ftp://example.com/a.png",
        "data:image/png,%89PNG",
        "just some words",
    ] {
        let err = classify(text.into()).await.unwrap_err();
        assert!(matches!(err, ProbeError::InvalidInput(_)), "{text:?}");
        assert_eq!(err.kind(), FailureKind::InvalidInput);
    }

    let err = classify(PathBuf::from("/definitely/not/here.png").into())
        .await
        .unwrap_err();
    assert!(matches!(err, ProbeError::InvalidInput(_)));
}

#[tokio::test]
async fn stream_is_passed_through() {
    let input = ProbeInput::stream(MemoryReader::new(fixtures::gif(1, 1)));
    assert_eq!(input.id(), "<stream>");
    assert!(matches!(
        classify(input).await.unwrap(),
        InputDescriptor::OpaqueStream(_)
    ));
}

#[test]
fn long_data_uris_are_abbreviated_in_ids() {
    let input = ProbeInput::from(fixtures::png_2x1_data_uri());
    let id = input.id();
    assert!(id.starts_with("data:image/png;base64,"));
    assert!(id.ends_with("..."));
    assert_eq!(id.chars().count(), 48 + 3);

    let short = ProbeInput::from("data:x;base64,AA==");
    assert_eq!(short.id(), "data:x;base64,AA==");

    let wrapped = ProbeInput::from("data:x;base64,\n  AAAA\n  AA==\n");
    assert_eq!(wrapped.id(), "data:x;base64,AAAAAA==");

    let url = ProbeInput::from("https://example.com/a.png");
    assert_eq!(url.id(), "https://example.com/a.png");
}
