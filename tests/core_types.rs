use blurbrush::{BlurBrushError, PixelBuffer, Region, TileRect};

#[test]
fn pixel_buffer_rejects_invalid_dimensions() {
    let err = PixelBuffer::new(Vec::new(), 0, 1).err().unwrap();
    assert_eq!(
        err,
        BlurBrushError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = PixelBuffer::zeroed(3, 0).err().unwrap();
    assert_eq!(
        err,
        BlurBrushError::InvalidDimensions {
            width: 3,
            height: 0,
        }
    );

    let err = PixelBuffer::filled(usize::MAX, 2, [0; 4]).err().unwrap();
    assert_eq!(
        err,
        BlurBrushError::InvalidDimensions {
            width: usize::MAX,
            height: 2,
        }
    );
}

#[test]
fn pixel_buffer_rejects_wrong_length() {
    let err = PixelBuffer::new(vec![0u8; 15], 2, 2).err().unwrap();
    assert_eq!(
        err,
        BlurBrushError::BufferSizeMismatch {
            expected: 16,
            got: 15,
        }
    );

    let err = PixelBuffer::new(vec![0u8; 17], 2, 2).err().unwrap();
    assert_eq!(
        err,
        BlurBrushError::BufferSizeMismatch {
            expected: 16,
            got: 17,
        }
    );
}

#[test]
fn pixel_buffer_rows_and_pixels() {
    let data: Vec<u8> = (0u8..24).collect();
    let buf = PixelBuffer::new(data, 3, 2).unwrap();
    assert_eq!(buf.stride(), 12);
    assert_eq!(buf.row(1).unwrap(), &(12u8..24).collect::<Vec<_>>()[..]);
    assert!(buf.row(2).is_none());
    assert_eq!(buf.pixel(2, 0), Some([8, 9, 10, 11]));
    assert_eq!(buf.pixel(0, 1), Some([12, 13, 14, 15]));
    assert!(buf.pixel(3, 0).is_none());
}

#[test]
fn filled_buffer_repeats_color() {
    let buf = PixelBuffer::filled(2, 3, [1, 2, 3, 4]).unwrap();
    assert_eq!(buf.data().len(), 24);
    assert!(buf.data().chunks_exact(4).all(|px| px == [1, 2, 3, 4]));
    assert!(buf.same_shape(&buf.scratch_like()));
}

#[test]
fn region_clip_matches_canvas_bounds() {
    let tile = Region::centered(3, 3, 10).clip(20, 12).unwrap();
    assert_eq!(
        tile,
        TileRect {
            x: 0,
            y: 0,
            width: 8,
            height: 8,
        }
    );
    assert!(tile.contains_point(7, 7));
    assert!(!tile.contains_point(8, 0));
}

#[test]
fn error_messages_are_readable() {
    let err = BlurBrushError::BufferSizeMismatch {
        expected: 16,
        got: 3,
    };
    assert_eq!(
        err.to_string(),
        "buffer size mismatch: expected 16 bytes, got 3"
    );
}
