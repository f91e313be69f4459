//! Integration tests driving the public API end-to-end:
//! document parsing, tree construction, bounding boxes,
//! containment queries and boxify.

use std::sync::Arc;

use bodytree::bbox::{enclosing, Bounded};
use bodytree::bodies::{Body, BodyList, Compound, Cuboid, Cylinder, Sphere};
use bodytree::json_structs::RootDocument;
use bodytree::numeric::Vector3;

fn parse(doc: &str) -> RootDocument {
    serde_json::from_str(doc).expect("document should deserialize")
}

#[test]
fn document_to_queries_round_trip() {
    let root = parse(r#"{
        "Body": { "Compound": { "Parts": [
            { "Cuboid": { "Position": "0 0 0", "Size": "2 2 2" } },
            { "Cuboid": { "Position": "10 0 0", "Size": "2 2 2" } }
        ] } },
        "Queries": { "Contains": ["0.5 0.5 0.5", "5 0 0"] }
    }"#);

    let bodies = root.build_all().expect("document should build");
    assert_eq!(bodies.len(), 1);
    let compound = &bodies[0];

    let bbox = compound.bounding_box();
    assert_eq!(bbox.position, Vector3::new(5.0, 0.0, 0.0));
    assert_eq!(bbox.size_x, 12.0);
    assert_eq!(bbox.size_y, 2.0);
    assert_eq!(bbox.size_z, 2.0);

    let answers: Vec<bool> = root.queries.contains.iter()
        .map(|p| compound.contains(*p))
        .collect();
    assert_eq!(answers, vec![true, false]);
}

#[test]
fn compound_extents_match_child_min_max_oracle() {
    // Direct restatement of the aggregation rule: per axis the extent
    // equals max(child max corner) - min(child min corner).
    let parts: BodyList = vec![
        Arc::new(Sphere::new(Vector3::new(-3.0, 2.0, 0.0), 1.0)),
        Arc::new(Cuboid::new(Vector3::new(4.0, 0.0, -1.0), 2.0, 6.0, 2.0)),
        Arc::new(Cylinder::new(Vector3::new(0.0, -5.0, 3.0), 4.0, 0.5)),
    ];

    let mins: Vec<Vector3> = parts.iter().map(|p| p.bounding_box().min_corner()).collect();
    let maxs: Vec<Vector3> = parts.iter().map(|p| p.bounding_box().max_corner()).collect();
    let oracle_min = mins.iter().fold(mins[0], |a, b| a.min(*b));
    let oracle_max = maxs.iter().fold(maxs[0], |a, b| a.max(*b));

    let bbox = enclosing(&parts);
    assert_eq!(bbox.x_interval().min, oracle_min.x);
    assert_eq!(bbox.x_interval().max, oracle_max.x);
    assert_eq!(bbox.y_interval().min, oracle_min.y);
    assert_eq!(bbox.y_interval().max, oracle_max.y);
    assert_eq!(bbox.z_interval().min, oracle_min.z);
    assert_eq!(bbox.z_interval().max, oracle_max.z);

    let compound = Compound::new(parts);
    assert_eq!(compound.bounding_box().x_interval().min, oracle_min.x);
    assert_eq!(compound.position(), bbox.position);
}

#[test]
fn boxified_document_tree_keeps_structure() {
    let root = parse(r#"{
        "Body": { "Compound": { "Parts": [
            { "Sphere": { "Position": "0 0 0", "Radius": 1 } },
            { "Compound": { "Parts": [
                { "Cylinder": { "Position": "10 0 0", "Height": 2, "Radius": 1 } }
            ] } }
        ] } }
    }"#);
    let body = &root.build_all().unwrap()[0];
    let boxed = body.boxify();

    // Leaf spheres became their boxes: bbox corners are now inside
    assert!(boxed.contains(Vector3::new(0.9, 0.9, 0.9)));
    // The gap between parts stays empty, so the tree was not flattened
    assert!(!boxed.contains(Vector3::new(5.0, 0.0, 0.0)));

    // Enclosing box is unchanged by boxify
    let before = body.bounding_box();
    let after = boxed.bounding_box();
    assert_eq!(before.position, after.position);
    assert_eq!(before.size_x, after.size_x);
    assert_eq!(before.size_y, after.size_y);
    assert_eq!(before.size_z, after.size_z);
}

#[test]
fn trees_are_shareable_across_threads() {
    let tree: Arc<dyn Body> = Arc::new(Compound::new(vec![
        Arc::new(Sphere::new(Vector3::ZERO, 2.0)),
        Arc::new(Cuboid::new(Vector3::new(10.0, 0.0, 0.0), 2.0, 2.0, 2.0)),
    ]));

    std::thread::scope(|scope| {
        for i in 0..4 {
            let tree = Arc::clone(&tree);
            scope.spawn(move || {
                let point = Vector3::new(i as f64, 0.0, 0.0);
                let inside = tree.contains(point);
                assert_eq!(inside, i <= 2); // on or inside the r=2 sphere
                assert_eq!(tree.bounding_box().size_x, 12.0);
            });
        }
    });
}

#[test]
fn demo_input_file_builds() {
    let root = bodytree::json_parser::load_document("./inputs/compound.json")
        .expect("demo input should parse");
    let bodies = root.build_all().expect("demo input should build");
    assert_eq!(bodies.len(), 1);
    assert!(root.queries.boxify);
    assert_eq!(root.queries.contains.len(), 5);

    // Sphere r=2 at origin: (1,1,1) and boundary point (2,0,0) are inside
    let body = &bodies[0];
    assert!(body.contains(Vector3::new(1.0, 1.0, 1.0)));
    assert!(body.contains(Vector3::new(2.0, 0.0, 0.0)));
    assert!(!body.contains(Vector3::new(5.0, 0.0, 0.0)));
}
