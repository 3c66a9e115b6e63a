//! Tests for the grid shape and the neighbor table.

use cloth_sim::{GridShape, NeighborSlot, NeighborTable};
use test_case::test_case;

#[test_case(4, 4, 4; "one block")]
#[test_case(8, 12, 4; "8x12")]
#[test_case(60, 28, 4; "reference")]
#[test_case(6, 9, 3; "block of 3")]
fn valid_shapes(width: usize, height: usize, block_size: usize) -> Result<(), String> {
    let shape = GridShape::with_block_size(width, height, block_size)?;
    assert_eq!(shape.len(), width * height);
    assert_eq!(shape.block_len(), block_size * block_size);
    assert!(!shape.is_empty());
    Ok(())
}

#[test_case(0, 4, 4; "zero width")]
#[test_case(4, 0, 4; "zero height")]
#[test_case(6, 4, 4; "width not a multiple")]
#[test_case(4, 10, 4; "height not a multiple")]
#[test_case(4, 4, 0; "zero block")]
fn invalid_shapes(width: usize, height: usize, block_size: usize) {
    let shape = GridShape::with_block_size(width, height, block_size);
    assert!(shape.is_err(), "Expected an error for {width}x{height} with block {block_size}, got {shape:?}");
}

#[test]
fn reference() -> Result<(), String> {
    let shape = GridShape::reference();
    assert_eq!(shape, GridShape::new(60, 28)?);
    assert_eq!(shape.block_size(), 4);
    assert_eq!(shape.len(), 1680);
    Ok(())
}

#[test]
fn indexing() -> Result<(), String> {
    let shape = GridShape::new(8, 4)?;
    for i in 0..shape.len() {
        let (x, y) = shape.coords(i);
        assert_eq!(shape.linear_index(x, y), i);
    }
    assert_eq!(shape.linear_index(3, 2), 19);
    assert!(shape.contains(7, 3));
    assert!(!shape.contains(8, 3));
    assert!(!shape.contains(-1, 0));
    assert_eq!(shape.offset_index(0, (-1, 0)), None);
    assert_eq!(shape.offset_index(0, (2, 1)), Some(10));
    Ok(())
}

#[test]
fn interior_neighbors() -> Result<(), String> {
    let shape = GridShape::new(8, 8)?;
    let table = NeighborTable::for_grid(&shape);
    assert_eq!(table.len(), shape.len());

    let i = shape.linear_index(4, 4);
    let expected = [
        (4, 3), // N
        (5, 3), // NE
        (5, 4), // E
        (5, 5), // SE
        (4, 5), // S
        (3, 5), // SW
        (3, 4), // W
        (3, 3), // NW
        (4, 2), // N-bend
        (6, 4), // E-bend
        (4, 6), // S-bend
        (2, 4), // W-bend
    ];
    for (slot, (n, &(x, y))) in NeighborSlot::ALL.iter().zip(table.neighbors(i).iter().zip(expected.iter())) {
        assert!(n.is_valid(), "{slot:?} should be valid");
        assert_eq!(n.index(), shape.linear_index(x, y), "Wrong index in {slot:?}");
    }
    assert!(!table.is_edge(i));
    assert!((table.not_edge_flag(i) - 1.0).abs() < f32::EPSILON);
    Ok(())
}

#[test]
fn corner_neighbors() -> Result<(), String> {
    let shape = GridShape::new(4, 4)?;
    let table = NeighborTable::for_grid(&shape);

    let valid = table
        .neighbors(0)
        .iter()
        .zip(NeighborSlot::ALL)
        .filter(|(n, _)| n.is_valid())
        .map(|(_, s)| s)
        .collect::<Vec<_>>();
    assert_eq!(
        valid,
        vec![NeighborSlot::East, NeighborSlot::SouthEast, NeighborSlot::South, NeighborSlot::EastBend, NeighborSlot::SouthBend]
    );
    assert!(table.is_edge(0));
    assert!(table.not_edge_flag(0).abs() < f32::EPSILON);
    Ok(())
}

#[test_case(4, 4; "4x4")]
#[test_case(8, 4; "8x4")]
#[test_case(12, 8; "12x8")]
fn symmetric(width: usize, height: usize) -> Result<(), String> {
    let shape = GridShape::new(width, height)?;
    let table = NeighborTable::for_grid(&shape);

    for i in 0..table.len() {
        for slot in NeighborSlot::ALL {
            let n = table.neighbor(i, slot);
            let (x, y) = shape.coords(i);
            let (dx, dy) = slot.offset();
            let inside = shape.contains(x as isize + dx, y as isize + dy);
            assert_eq!(n.is_valid(), inside, "Validity of {slot:?} of {i} does not match the geometry");
            if n.is_valid() {
                let back = table.neighbor(n.index(), slot.opposite());
                assert!(back.is_valid(), "{slot:?} of {i} is not mirrored");
                assert_eq!(back.index(), i, "{slot:?} of {i} is not mirrored");
            }
        }
    }
    Ok(())
}

#[test_case(4, 4; "4x4")]
#[test_case(8, 8; "8x8")]
#[test_case(60, 28; "reference")]
fn edge_count(width: usize, height: usize) -> Result<(), String> {
    let shape = GridShape::new(width, height)?;
    let table = NeighborTable::for_grid(&shape);

    // Points at least two cells from every border are free.
    let free = width.saturating_sub(4) * height.saturating_sub(4);
    assert_eq!(table.edge_count(), shape.len() - free);
    assert_eq!(table.edge_mask().iter().filter(|&&e| !e).count(), free);
    Ok(())
}

#[test]
fn slots() {
    for slot in NeighborSlot::ALL {
        assert_eq!(NeighborSlot::ALL[slot.position()], slot);
        assert_eq!(slot.opposite().opposite(), slot);
        let (dx, dy) = slot.offset();
        let (ox, oy) = slot.opposite().offset();
        assert_eq!((dx + ox, dy + oy), (0, 0), "{slot:?} and its opposite do not cancel");
        assert_eq!(slot.is_bend(), NeighborSlot::BENDS.contains(&slot));
    }
}
