//! Parses a Doxygen `hierarchy.js` index, prints its structure and checks
//! that re-emitting it reproduces the input byte for byte.
//!
//! Run with `cargo run --example hierarchy_dump [path/to/hierarchy.js]`.

use std::fs;

use anyhow::{bail, Context, Result};
use sylva::hierarchy::{Hierarchy, HierarchyNode};

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/hierarchy.js".to_string());
    let source = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let hierarchy = Hierarchy::parse(&source).with_context(|| format!("parsing {path}"))?;

    println!(
        "{path}: {} top-level entries, {} nodes, max depth {}",
        hierarchy.roots.len(),
        hierarchy.node_count(),
        hierarchy.max_depth()
    );
    for root in &hierarchy.roots {
        print_node(root, 0);
    }

    if hierarchy.to_js() == source {
        println!("round trip: byte-identical");
    } else {
        bail!("round trip differs from the input (not Doxygen-generated?)");
    }

    Ok(())
}

fn print_node(node: &HierarchyNode, depth: usize) {
    let link = node.link.as_deref().unwrap_or("-");
    println!("{}{} ({link})", "  ".repeat(depth), node.name);
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
