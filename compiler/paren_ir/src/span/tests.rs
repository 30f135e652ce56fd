use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(15));
    assert!(!span.contains(20));
}

#[test]
fn test_span_merge() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert!(!span.contains(7));
}

#[test]
fn test_try_from_range_rejects_huge_offsets() {
    let big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(big..big),
        Err(SpanError::StartTooLarge(big))
    );
    assert_eq!(
        Span::try_from_range(0..big),
        Err(SpanError::EndTooLarge(big))
    );
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));
}

#[test]
fn test_slice_borrows_source_text() {
    let source = "(add 1 2)";
    assert_eq!(Span::new(1, 4).slice(source), "add");
    assert_eq!(Span::new(0, 9).slice(source), source);
}

#[test]
fn test_slice_out_of_bounds_is_empty() {
    assert_eq!(Span::new(4, 40).slice("(a)"), "");
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(3, 8).to_string(), "3..8");
    assert_eq!(format!("{:?}", Span::new(0, 1)), "0..1");
}
