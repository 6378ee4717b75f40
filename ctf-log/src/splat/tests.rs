//! Tests for splat log decoding

use super::*;
use crate::test_utils::BitWriter;

#[test]
fn test_axis_for_single_tile() {
    let axis = SplatAxis::new(1);
    assert_eq!(axis.bits(), 6);
    assert_eq!(axis.offset(), ((64 - 40) >> 1) + 20);
    assert_eq!(axis.offset(), 32);
}

#[test]
fn test_axis_widths() {
    // (size, bits, offset)
    let cases = [
        (2, 7, 44),    // domain 0..=79
        (16, 10, 212), // domain 0..=639
        (40, 11, 244), // domain 0..=1599
        (64, 12, 788), // domain 0..=2559
    ];
    for (size, bits, offset) in cases {
        let axis = SplatAxis::new(size);
        assert_eq!(axis.bits(), bits, "size {size}");
        assert_eq!(axis.offset(), offset, "size {size}");
        assert!(1u64 << bits > u64::from(size) * 40 - 1);
        assert!(1u64 << (bits - 1) <= u64::from(size) * 40 - 1);
    }
}

#[test]
fn test_axis_at_maximum_dimension() {
    let axis = SplatAxis::new(MAX_SPLAT_DIMENSION);
    assert_eq!(axis.bits(), 31);
    assert_eq!(axis.offset(), 24);
}

#[test]
fn test_grid_rejects_out_of_range() {
    assert_eq!(
        SplatGrid::new(0, 10).unwrap_err(),
        LogError::InvalidSplatDimension {
            axis: "width",
            size: 0
        }
    );
    assert_eq!(
        SplatGrid::new(10, MAX_SPLAT_DIMENSION + 1).unwrap_err(),
        LogError::InvalidSplatDimension {
            axis: "height",
            size: MAX_SPLAT_DIMENSION + 1
        }
    );
    assert!(SplatGrid::new(1, MAX_SPLAT_DIMENSION).is_ok());
}

#[test]
fn test_decode_batches_and_empty_ticks() {
    let grid = SplatGrid::new(1, 2).unwrap();
    let (x, y) = (grid.x, grid.y);

    let mut writer = BitWriter::new();
    // tick 0: one splat at the map origin
    writer
        .tally(1)
        .fixed(x.offset() as u32, x.bits())
        .fixed(y.offset() as u32, y.bits());
    // ticks 1-2: nothing
    writer.tally(0).tally(0);
    // tick 3: two splats, one in the left margin
    writer
        .tally(2)
        .fixed(0, x.bits())
        .fixed(50, y.bits())
        .fixed(63, x.bits())
        .fixed(127, y.bits());
    let data = writer.finish();

    let mut batches: Vec<SplatBatch> = Vec::new();
    let ticks = SplatLogDecoder::new(&data, grid).decode(&mut batches);

    assert_eq!(
        batches,
        vec![
            SplatBatch {
                tick: 0,
                splats: vec![(0, 0)]
            },
            SplatBatch {
                tick: 3,
                splats: vec![(-32, 6), (31, 83)]
            },
        ]
    );
    // Trailing pad bits in the last byte each count as an empty tick
    assert!(ticks >= 4);
}

#[test]
fn test_tick_advances_on_padding() {
    // A single zero byte is eight empty ticks
    let grid = SplatGrid::new(10, 10).unwrap();
    let mut batches: Vec<SplatBatch> = Vec::new();
    let ticks = SplatLogDecoder::new(&[0x00], grid).decode(&mut batches);
    assert_eq!(ticks, 8);
    assert!(batches.is_empty());
}

#[test]
fn test_truncated_coordinates_read_zero() {
    let grid = SplatGrid::new(1, 1).unwrap();
    // Tally of one, then the data stops
    let mut batches: Vec<SplatBatch> = Vec::new();
    SplatLogDecoder::new(&[0b1000_0000], grid).decode(&mut batches);

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].splats, vec![(-32, -32)]);
}

#[test]
fn test_batch_serializes_pairs() {
    let batch = SplatBatch {
        tick: 12,
        splats: vec![(1, -2)],
    };
    assert_eq!(
        serde_json::to_string(&batch).unwrap(),
        r#"{"tick":12,"splats":[[1,-2]]}"#
    );
}
