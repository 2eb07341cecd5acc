use qrscan::geometry::{convex_hull, outline};
use qrscan::Point;
use test_case::test_case;

fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test_case(&[] => 0; "empty")]
#[test_case(&[(3, 3)] => 1; "single point")]
#[test_case(&[(0, 0), (4, 4)] => 2; "segment")]
#[test_case(&[(0, 0), (4, 0), (0, 4)] => 3; "triangle")]
#[test_case(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)] => 4; "square with centre")]
#[test_case(&[(0, 0), (2, 0), (4, 0), (4, 4), (0, 4)] => 4; "collinear edge point")]
#[test_case(&[(0, 2), (1, 0), (3, 0), (4, 2), (3, 4), (1, 4)] => 6; "convex hexagon")]
fn test_hull_size(raw: &[(i32, i32)]) -> usize {
    convex_hull(&pts(raw)).len()
}

#[test_case(&[(0, 0), (10, 0), (10, 10)] => 3; "triangle kept")]
#[test_case(&[(0, 0), (10, 0), (3, 3), (0, 10)] => 4; "concave quad kept")]
#[test_case(&[(0, 0), (10, 0), (3, 3), (10, 10), (0, 10)] => 4; "concave pentagon hulled")]
#[test_case(&[(0, 0), (5, 2), (10, 0), (10, 10), (5, 8), (0, 10)] => 4; "notched hexagon hulled")]
fn test_outline_size(raw: &[(i32, i32)]) -> usize {
    outline(&pts(raw)).len()
}

#[test]
fn test_hull_is_counter_clockwise_from_leftmost() {
    let hull = convex_hull(&pts(&[(4, 4), (0, 4), (2, 1), (4, 0), (0, 0)]));
    assert_eq!(hull, pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]));
}

#[test]
fn test_hull_does_not_depend_on_input_order() {
    let points = pts(&[(7, 1), (0, 3), (5, 9), (2, 2), (9, 6), (1, 8), (4, 4)]);
    let mut reversed = points.clone();
    reversed.reverse();
    assert_eq!(convex_hull(&points), convex_hull(&reversed));
}

#[test]
fn test_hull_contains_every_input_point() {
    let points = pts(&[(7, 1), (0, 3), (5, 9), (2, 2), (9, 6), (1, 8), (4, 4)]);
    let hull = convex_hull(&points);

    for p in &points {
        for i in 0..hull.len() {
            let (a, b) = (hull[i], hull[(i + 1) % hull.len()]);
            let cross = i64::from(b.x - a.x) * i64::from(p.y - a.y) - i64::from(b.y - a.y) * i64::from(p.x - a.x);
            assert!(cross >= 0, "{:?} lies outside edge {:?} -> {:?}", p, a, b);
        }
    }
}
