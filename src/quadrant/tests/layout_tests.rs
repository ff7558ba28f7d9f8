//! Tests for the quadrant layout

extern crate std;

use crate::quadrant::{Label, QuadrantMap, Region, SplitError};

fn assert_partition(width: u32, height: u32) {
    let map = QuadrantMap::from_dimensions(width, height).unwrap();

    let tl = map.region(Label::TopLeft);
    let tr = map.region(Label::TopRight);
    let bl = map.region(Label::BottomLeft);
    let br = map.region(Label::BottomRight);

    std::assert_eq!(tl.width + tr.width, width);
    std::assert_eq!(bl.width + br.width, width);
    std::assert_eq!(tl.height + bl.height, height);
    std::assert_eq!(tr.height + br.height, height);

    let total: u64 = map.iter().map(|(_, r)| r.area()).sum();
    std::assert_eq!(total, width as u64 * height as u64);

    let regions: Vec<Region> = map.iter().map(|(_, r)| r).collect();
    for (i, a) in regions.iter().enumerate() {
        std::assert!(a.width > 0 && a.height > 0);
        std::assert!(a.end_x() <= width && a.end_y() <= height);
        for b in &regions[i + 1..] {
            std::assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn test_even_dimensions() {
    let map = QuadrantMap::from_dimensions(100, 80).unwrap();
    std::assert_eq!(map.region(Label::TopLeft), Region::new(0, 0, 50, 40));
    std::assert_eq!(map.region(Label::TopRight), Region::new(50, 0, 50, 40));
    std::assert_eq!(map.region(Label::BottomLeft), Region::new(0, 40, 50, 40));
    std::assert_eq!(map.region(Label::BottomRight), Region::new(50, 40, 50, 40));
}

#[test]
fn test_odd_dimensions_use_floor_split() {
    let map = QuadrantMap::from_dimensions(5, 7).unwrap();
    std::assert_eq!(map.region(Label::TopLeft).width, 2);
    std::assert_eq!(map.region(Label::TopRight).width, 3);
    std::assert_eq!(map.region(Label::TopLeft).height, 3);
    std::assert_eq!(map.region(Label::BottomLeft).height, 4);
    std::assert_eq!(map.region(Label::BottomRight), Region::new(2, 3, 3, 4));
}

#[test]
fn test_minimum_dimensions() {
    let map = QuadrantMap::from_dimensions(2, 2).unwrap();
    for (_, region) in map.iter() {
        std::assert_eq!((region.width, region.height), (1, 1));
    }
}

#[test]
fn test_degenerate_dimensions_rejected() {
    for (w, h) in [(1, 2), (2, 1), (1, 1), (0, 10), (10, 0)] {
        match QuadrantMap::from_dimensions(w, h) {
            Err(SplitError::InvalidDimensions { width, height }) => {
                std::assert_eq!((width, height), (w, h));
            },
            other => panic!("expected InvalidDimensions for {}x{}, got {:?}", w, h, other),
        }
    }
}

#[test]
fn test_regions_partition_image() {
    for (w, h) in [(2, 2), (3, 2), (2, 3), (5, 5), (17, 9), (100, 80), (1023, 769)] {
        assert_partition(w, h);
    }
}

#[test]
fn test_every_pixel_in_exactly_one_region() {
    let map = QuadrantMap::from_dimensions(7, 5).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            let hits = map.iter().filter(|(_, r)| r.contains(x, y)).count();
            std::assert_eq!(hits, 1, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_iteration_order() {
    let map = QuadrantMap::from_dimensions(4, 4).unwrap();
    let labels: Vec<Label> = map.iter().map(|(l, _)| l).collect();
    std::assert_eq!(labels, Label::ALL.to_vec());
}
