//! Tests for quadrant labels

extern crate std;

use crate::quadrant::Label;

#[test]
fn test_label_order() {
    let mut labels = vec![Label::BottomRight, Label::TopLeft, Label::BottomLeft, Label::TopRight];
    labels.sort();
    std::assert_eq!(labels, Label::ALL.to_vec());
}

#[test]
fn test_label_parse_spellings() {
    for text in ["top-left", "top_left", "topLeft", "TopLeft", "TL", " tl "] {
        std::assert_eq!(text.parse::<Label>(), Ok(Label::TopLeft), "spelling {}", text);
    }
    std::assert_eq!("bottom-right".parse::<Label>(), Ok(Label::BottomRight));
    std::assert_eq!("bottomLeft".parse::<Label>(), Ok(Label::BottomLeft));
    std::assert_eq!("tr".parse::<Label>(), Ok(Label::TopRight));
}

#[test]
fn test_label_parse_unknown() {
    std::assert!("middle".parse::<Label>().is_err());
    std::assert!("".parse::<Label>().is_err());
}

#[test]
fn test_label_display_round_trips() {
    for label in Label::ALL {
        std::assert_eq!(label.to_string().parse::<Label>(), Ok(label));
    }
}
