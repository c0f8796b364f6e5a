use super::*;

fn empty_list() -> DrawList {
    DrawList::new(
        Scene::Overview,
        Canvas::default(),
        &SceneText {
            title: "t".to_string(),
            description: "d".to_string(),
        },
    )
}

#[test]
fn new_list_is_empty_and_carries_texts() {
    let list = empty_list();
    assert!(list.ops.is_empty());
    assert_eq!(list.title, "t");
    assert_eq!(list.description, "d");
}

#[test]
fn roles_are_counted_per_variant() {
    let mut list = empty_list();
    list.push(DrawOp::Circle {
        role: Role::Marker(0),
        center: Point::new(1.0, 2.0),
        radius: 5.0,
        fill: Color::BLUE,
    });
    list.push(DrawOp::Circle {
        role: Role::Marker(1),
        center: Point::new(3.0, 4.0),
        radius: 5.0,
        fill: Color::BLUE,
    });
    list.push(DrawOp::Text {
        role: Role::Info,
        origin: Point::new(10.0, 20.0),
        content: "hello".to_string(),
        style: TextStyle::plain(14.0, Color::BLACK).bold(),
    });

    assert_eq!(list.marker_count(), 2);
    assert_eq!(list.count(Role::Marker(1)), 1);
    assert_eq!(list.text(Role::Info), Some("hello"));
    assert_eq!(
        list.circle(Role::Marker(1)),
        Some((Point::new(3.0, 4.0), 5.0, Color::BLUE))
    );
    assert_eq!(list.circle(Role::Tooltip), None);
}

#[test]
fn annotate_records_metadata_and_tags_ops() {
    let mut list = empty_list();
    list.annotate(
        Annotation::new(Point::new(100.0, 200.0), 50.0, -50.0, "2000", "Temperature in 2000"),
        Color::BLACK,
    );
    assert_eq!(list.annotations.len(), 1);
    assert!(list.count(Role::Annotation(0)) > 0);
    assert_eq!(list.count(Role::Annotation(0)), list.ops.len());
}

#[test]
fn line_helper_builds_two_point_path() {
    let op = DrawOp::line(
        Role::Axis,
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Stroke {
            color: Color::BLACK,
            width: 1.0,
        },
    );
    match op {
        DrawOp::Path { path, fill, .. } => {
            assert_eq!(path.elements().len(), 2);
            assert!(fill.is_none());
        }
        other => panic!("expected path, got {other:?}"),
    }
}
