//! Tests for the JPEG segment walker.

use std::sync::atomic::Ordering;

use crate::error::ProbeError;
use crate::format::{DecodeError, ImageFormat, Metadata, probe_stream};
use crate::io::StreamSource;
use crate::tests::fixtures::{self, TricklingReader, probe_bytes};

#[tokio::test]
async fn baseline_frame() {
    let meta = probe_bytes(fixtures::jpeg(0xc0, 420, 240)).await.unwrap();
    assert_eq!(meta, Metadata::new(ImageFormat::Jpeg, 420, 240));
}

#[tokio::test]
async fn progressive_frame() {
    let meta = probe_bytes(fixtures::jpeg(0xc2, 1024, 683)).await.unwrap();
    assert_eq!(meta.dimensions(), Some((1024, 683)));
}

#[tokio::test]
async fn frame_immediately_after_soi() {
    let mut data = vec![0xff, 0xd8];
    data.extend_from_slice(&fixtures::sof_segment(0xc0, 8, 4));
    let meta = probe_bytes(data).await.unwrap();
    assert_eq!(meta.dimensions(), Some((8, 4)));
}

#[tokio::test]
async fn skips_large_segments_before_frame() {
    let mut data = vec![0xff, 0xd8];
    data.extend_from_slice(&fixtures::app_segment(0xe0, 16));
    // An EXIF block and a quantization table, both longer than the prefix.
    data.extend_from_slice(&fixtures::app_segment(0xe1, 4000));
    data.extend_from_slice(&fixtures::app_segment(0xdb, 132));
    data.extend_from_slice(&fixtures::sof_segment(0xc2, 3000, 2000));
    data.extend(std::iter::repeat_n(0u8, 100_000));

    let (reader, pulled) = TricklingReader::new(data, 512);
    let mut stream = StreamSource::from_reader("jpeg", Box::new(reader));
    let meta = probe_stream(&mut stream).await.unwrap();

    assert_eq!(meta.dimensions(), Some((3000, 2000)));
    // Headers end around byte 4200; the scan data is never pulled.
    assert!(pulled.load(Ordering::SeqCst) < 5000);
}

#[tokio::test]
async fn non_frame_sof_markers_are_skipped() {
    // SOF1 (extended sequential) is not one of the two recognized frames.
    let mut data = vec![0xff, 0xd8];
    data.extend_from_slice(&fixtures::sof_segment(0xc1, 1, 1));
    data.extend_from_slice(&fixtures::sof_segment(0xc0, 77, 55));
    let meta = probe_bytes(data).await.unwrap();
    assert_eq!(meta.dimensions(), Some((77, 55)));
}

#[tokio::test]
async fn missing_marker_byte_is_malformed() {
    let mut data = vec![0xff, 0xd8];
    data.extend_from_slice(&fixtures::app_segment(0xe0, 16));
    data.extend_from_slice(&[0x00, 0xc0, 0x00, 0x11, 0x08, 0, 1, 0, 1]);

    let err = probe_bytes(data).await.unwrap_err();
    assert!(matches!(
        err,
        ProbeError::Malformed(DecodeError::BadMarker {
            offset: 20,
            byte: 0x00
        })
    ));
}

#[tokio::test]
async fn stream_ending_before_frame_is_malformed() {
    let mut data = vec![0xff, 0xd8];
    data.extend_from_slice(&fixtures::app_segment(0xe0, 16));
    data.extend_from_slice(&fixtures::app_segment(0xe1, 64));

    let err = probe_bytes(data).await.unwrap_err();
    assert!(matches!(
        err,
        ProbeError::Malformed(DecodeError::Truncated { .. })
    ));
}

#[tokio::test]
async fn soi_only() {
    let err = probe_bytes(vec![0xff, 0xd8]).await.unwrap_err();
    assert!(matches!(err, ProbeError::Malformed(_)));
}
