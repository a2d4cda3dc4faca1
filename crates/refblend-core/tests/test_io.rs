mod common;

use std::path::Path;

use common::png_bytes;
use refblend_core::error::RefblendError;
use refblend_core::io::{decode_image, decode_thumbnail, detect_mime, image_dimensions, load_payload, save_all};
use refblend_core::request::GeneratedImage;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

#[test]
fn test_load_payload_sniffs_png() {
    let dir = tempfile::tempdir().unwrap();
    // Misleading extension: contents win.
    let path = dir.path().join("ref.jpg");
    let bytes = png_bytes(3, 2);
    std::fs::write(&path, &bytes).unwrap();

    let payload = load_payload(&path).unwrap();
    assert_eq!(payload.mime_type, "image/png");
    assert_eq!(payload.decode().unwrap(), bytes);
}

#[test]
fn test_detect_mime_falls_back_to_extension() {
    let mime = detect_mime(b"not really an image", Path::new("photo.webp")).unwrap();
    assert_eq!(mime, "image/webp");
}

#[test]
fn test_detect_mime_unknown() {
    let err = detect_mime(b"plain text", Path::new("notes.txt")).unwrap_err();
    assert!(matches!(err, RefblendError::UnsupportedMime(ref ext) if ext == "txt"));
}

#[test]
fn test_load_payload_missing_file() {
    let err = load_payload(Path::new("/definitely/not/here.png")).unwrap_err();
    assert!(matches!(err, RefblendError::Io(_)));
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[test]
fn test_decode_image() {
    let decoded = decode_image(&png_bytes(5, 7)).unwrap();
    assert_eq!((decoded.width, decoded.height), (5, 7));
    assert_eq!(decoded.rgba.len(), 5 * 7 * 4);
    let dims = image_dimensions(&png_bytes(5, 7)).unwrap();
    assert_eq!((dims.width, dims.height), (5.0, 7.0));
}

#[test]
fn test_decode_thumbnail_keeps_aspect() {
    let thumb = decode_thumbnail(&png_bytes(400, 100), 128).unwrap();
    assert_eq!(thumb.width, 128);
    assert_eq!(thumb.height, 32);
    assert_eq!(thumb.rgba.len(), 128 * 32 * 4);

    let small = decode_thumbnail(&png_bytes(20, 10), 128).unwrap();
    assert_eq!((small.width, small.height), (20, 10));
}

#[test]
fn test_decode_garbage_fails() {
    let err = decode_image(b"\x89PNG but broken").unwrap_err();
    assert!(matches!(err, RefblendError::AssetLoad(_)));
}

// ---------------------------------------------------------------------------
// Saving results
// ---------------------------------------------------------------------------

#[test]
fn test_save_all_names_files_by_index() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let payload = refblend_core::request::ImagePayload::from_bytes("image/png", &png_bytes(2, 2));
    let images = vec![
        GeneratedImage {
            index: 1,
            data_base64: payload.data_base64.clone(),
        },
        GeneratedImage {
            index: 2,
            data_base64: payload.data_base64.clone(),
        },
    ];

    let paths = save_all(&images, &out).unwrap();
    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0], out.join("generated_image_1.png"));
    assert_eq!(paths[1], out.join("generated_image_2.png"));
    assert_eq!(std::fs::read(&paths[1]).unwrap(), png_bytes(2, 2));
}

#[test]
fn test_save_rejects_bad_base64() {
    let dir = tempfile::tempdir().unwrap();
    let images = vec![GeneratedImage {
        index: 1,
        data_base64: "!!!not base64!!!".into(),
    }];
    let err = save_all(&images, dir.path()).unwrap_err();
    assert!(matches!(err, RefblendError::Base64(_)));
}
