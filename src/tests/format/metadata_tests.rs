//! Tests for the serialized shape of `Metadata`.

use serde_json::json;

use crate::format::{ImageFormat, Metadata, NUM_IMAGES, ORIENTATION};

#[test]
fn serializes_type_width_height() {
    let meta = Metadata::new(ImageFormat::Png, 2, 1);
    assert_eq!(
        serde_json::to_value(&meta).unwrap(),
        json!({"type": "png", "width": 2, "height": 1})
    );
}

#[test]
fn extra_fields_are_flattened() {
    let meta = Metadata::new(ImageFormat::Ico, 256, 256).with_extra(NUM_IMAGES, Some(4));
    assert_eq!(
        meta.to_json(),
        json!({"type": "ico", "width": 256, "height": 256, "num_images": 4})
    );
}

#[test]
fn null_fields_stay_present() {
    let meta = Metadata::with_dimensions(ImageFormat::Tiff, Some(10), None)
        .with_extra(ORIENTATION, None);
    assert_eq!(
        meta.to_json(),
        json!({"type": "tiff", "width": 10, "height": null, "orientation": null})
    );
}

#[test]
fn deserializes_back() {
    let meta: Metadata = serde_json::from_value(json!({
        "type": "jpg", "width": 420, "height": 240
    }))
    .unwrap();
    assert_eq!(meta, Metadata::new(ImageFormat::Jpeg, 420, 240));
}
