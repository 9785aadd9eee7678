//! Tests for the ByteReader implementations.

use crate::io::{AsyncReadSource, ByteReader, MemoryReader};

#[tokio::test]
async fn memory_reader_hands_out_slices() {
    let mut reader = MemoryReader::new(b"abcdef".to_vec());

    assert_eq!(reader.read(4).await.unwrap(), b"abcd".to_vec());
    assert_eq!(reader.remaining(), 2);
    assert_eq!(reader.read(4).await.unwrap(), b"ef".to_vec());
    assert!(reader.read(4).await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_reader_clones_keep_their_own_position() {
    let mut a = MemoryReader::new(&b"xyz"[..]);
    a.read(1).await.unwrap();
    let mut b = a.clone();

    assert_eq!(a.read(2).await.unwrap(), b"yz".to_vec());
    assert_eq!(b.read(2).await.unwrap(), b"yz".to_vec());
}

#[tokio::test]
async fn async_read_source_fills_the_request() {
    // A slice reader returns everything at once; a duplex pipe returns
    // whatever was written, so exercise both.
    let mut reader = AsyncReadSource::new(&b"0123456789"[..]);
    assert_eq!(reader.read(4).await.unwrap(), b"0123".to_vec());
    assert_eq!(reader.read(100).await.unwrap(), b"456789".to_vec());
    assert!(reader.read(1).await.unwrap().is_empty());

    let (mut tx, rx) = tokio::io::duplex(4);
    let writer = tokio::spawn(async move {
        use tokio::io::AsyncWriteExt;
        tx.write_all(&[7u8; 20]).await.unwrap();
    });

    let mut reader = AsyncReadSource::new(rx);
    assert_eq!(reader.read(20).await.unwrap(), vec![7u8; 20]);
    writer.await.unwrap();
}

#[tokio::test]
async fn boxed_readers_forward() {
    let mut boxed: Box<dyn ByteReader> = Box::new(MemoryReader::new(vec![1, 2, 3]));
    assert_eq!(boxed.read(2).await.unwrap(), vec![1, 2]);
}
