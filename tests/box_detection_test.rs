//! Tests for box validation, location and hierarchy discovery

use std::fs;

use rstest::rstest;

use boxnest::domain::{
    find_box_at, find_children, is_valid, is_zero_sized, render, BoxTree, DepthMarks, Grid, Rect,
    RowPolicy,
};

fn load(name: &str) -> Grid {
    let content = fs::read_to_string(format!("tests/resources/grids/{}", name)).unwrap();
    Grid::parse(&content, RowPolicy::Strict).unwrap()
}

/// Draw a single box outline on a blank grid.
fn draw(height: usize, width: usize, rect: Rect) -> Grid {
    let mut grid = Grid::new(height, width).unwrap();
    render(&mut grid, &BoxTree::new(rect, vec![]), 0, DepthMarks::Symbolic);
    grid
}

fn assert_children_well_formed(node: &BoxTree) {
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        assert!(
            node.rect().strictly_contains(child.rect()),
            "{} not inside {}",
            child.rect(),
            node.rect()
        );
        for other in &children[i + 1..] {
            assert!(
                !child.rect().overlaps(other.rect()),
                "{} overlaps {}",
                child.rect(),
                other.rect()
            );
        }
        assert_children_well_formed(child);
    }
}

// ============================================================
// Validator and locator
// ============================================================

#[rstest]
#[case(Rect::new(0, 0, 1, 1))]
#[case(Rect::new(0, 0, 5, 7))]
#[case(Rect::new(2, 3, 4, 4))]
#[case(Rect::new(1, 1, 5, 6))]
#[case(Rect::new(4, 0, 5, 7))]
fn given_drawn_box_when_validating_and_locating_then_recovers_exact_rect(#[case] rect: Rect) {
    let grid = draw(6, 8, rect);

    assert!(is_valid(&grid, &rect));
    assert_eq!(find_box_at(&grid, rect.top, rect.left), Some(rect));
}

#[rstest]
#[case(Rect::new(0, 0, 0, 4))]
#[case(Rect::new(0, 2, 3, 2))]
#[case(Rect::new(1, 1, 1, 1))]
fn given_zero_sized_rect_when_validating_then_is_never_a_box(#[case] rect: Rect) {
    let grid = Grid::from_rows(&["+---+", "+---+", "+---+", "+---+"]).unwrap();

    assert!(is_zero_sized(&rect));
    assert!(!is_valid(&grid, &rect));
    if let Some(found) = find_box_at(&grid, rect.top, rect.left) {
        assert!(!is_zero_sized(&found));
    }
}

#[test]
fn given_box_on_last_column_when_scan_would_leave_grid_then_returns_none() {
    let grid = Grid::from_rows(&["+--", "|  ", "+--"]).unwrap();

    assert_eq!(find_box_at(&grid, 0, 0), None);
}

// ============================================================
// Children discovery
// ============================================================

#[test]
fn given_single_box_grid_when_building_then_root_is_leaf() {
    let tree = BoxTree::build(&load("1.txt")).unwrap();

    assert_eq!(*tree.rect(), Rect::new(0, 0, 2, 2));
    assert!(tree.children().is_empty());
}

#[test]
fn given_two_side_by_side_children_when_finding_then_returns_left_to_right() {
    let grid = load("2.txt");

    let children = find_children(&grid, &grid.bounds(), true).unwrap();

    let rects: Vec<Rect> = children.iter().map(|c| *c.rect()).collect();
    assert_eq!(rects, vec![Rect::new(1, 1, 3, 3), Rect::new(1, 5, 3, 7)]);
}

#[test]
fn given_concentric_boxes_when_building_then_nests_one_per_level() {
    let tree = BoxTree::build(&load("3.txt")).unwrap();

    assert_eq!(tree.depth(), 5);
    assert_eq!(tree.len(), 5);
    let innermost = tree.iter().last().unwrap();
    assert_eq!(innermost.0, 4);
    assert_eq!(*innermost.1.rect(), Rect::new(4, 4, 6, 6));
}

#[test]
fn given_static_grid_when_finding_twice_then_results_are_identical() {
    let grid = load("more/nested.txt");

    let first = find_children(&grid, &grid.bounds(), true).unwrap();
    let second = find_children(&grid, &grid.bounds(), true).unwrap();

    assert_eq!(first, second);
}

#[rstest]
#[case("1.txt")]
#[case("2.txt")]
#[case("3.txt")]
#[case("more/nested.txt")]
fn given_resource_grid_when_building_then_children_are_disjoint_and_inside(#[case] name: &str) {
    let tree = BoxTree::build(&load(name)).unwrap();

    assert_children_well_formed(&tree);
}

#[test]
fn given_box_touching_right_neighbour_when_finding_then_neighbour_is_missed() {
    let grid = Grid::from_rows(&[
        "+-----+",
        "|+-+-+|",
        "|| | ||",
        "|+-+-+|",
        "+-----+",
    ])
    .unwrap();

    let children = find_children(&grid, &grid.bounds(), true).unwrap();

    assert_eq!(children.len(), 1);
    assert_eq!(*children[0].rect(), Rect::new(1, 1, 3, 3));
}

#[test]
fn given_adjacent_boxes_with_own_borders_when_finding_then_both_found() {
    let grid = Grid::from_rows(&[
        "+--------+",
        "|+-++-+  |",
        "|| || |  |",
        "|+-++-+  |",
        "+--------+",
    ])
    .unwrap();

    let children = find_children(&grid, &grid.bounds(), true).unwrap();

    let rects: Vec<Rect> = children.iter().map(|c| *c.rect()).collect();
    assert_eq!(rects, vec![Rect::new(1, 1, 3, 3), Rect::new(1, 4, 3, 6)]);
}

#[test]
fn given_interior_without_boxes_when_finding_then_no_children() {
    let grid = Grid::from_rows(&["+----+", "| +- |", "| |  |", "+----+"]).unwrap();

    let children = find_children(&grid, &grid.bounds(), true).unwrap();

    assert!(children.is_empty());
}

#[test]
fn given_find_children_when_done_then_caller_grid_is_unmarked() {
    let grid = load("2.txt");
    let before = grid.clone();

    find_children(&grid, &grid.bounds(), true).unwrap();

    assert_eq!(grid, before);
}
