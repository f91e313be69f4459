/*

    A small inspector for solid body trees: loads a JSON document,
    reports each body's bounding box, answers the document's
    containment queries and (optionally) boxifies the tree.

    @date: 2 Dec, 2025
    @author: Bartu

*/

use std::{self, env};
use tracing::{info, warn, error, debug};
use tracing_subscriber;

use bodytree::bbox::Bounded;
use bodytree::bodies::Body;
use bodytree::json_parser::load_document;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: String = if args.len() == 1 {
        warn!("No arguments were provided, setting default document path...");
        String::from("./inputs/compound.json")
    } else if args.len() == 2 {
        args[1].clone()
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading bodies from {}...", json_path);
    let root = load_document(&json_path).map_err(|e| {
        error!("Failed to load document: {}", e);
        e
    })?;

    let bodies = root.build_all()?;
    debug!("Document is built successfully.\n {:#?}", bodies);

    for (i, body) in bodies.iter().enumerate() {
        let bbox = body.bounding_box();
        info!(
            "Body {}: bounding box centered at ({}, {}, {}) with extents ({}, {}, {})",
            i,
            bbox.position.x, bbox.position.y, bbox.position.z,
            bbox.size_x, bbox.size_y, bbox.size_z,
        );

        for point in &root.queries.contains {
            info!("Body {} contains ({}, {}, {}): {}", i, point.x, point.y, point.z, body.contains(*point));
        }

        if root.queries.boxify {
            let boxed = body.boxify();
            debug!("Boxified tree:\n {:#?}", boxed);
            let boxed_bbox = boxed.bounding_box();
            info!(
                "Body {} boxified, enclosing box unchanged: extents ({}, {}, {})",
                i,
                boxed_bbox.size_x, boxed_bbox.size_y, boxed_bbox.size_z,
            );
        }
    }

    info!("Finished execution.");
    Ok(())
}
