pub mod boundary;
pub mod concave;
pub mod dual_boundary;
pub mod l_shape;
pub mod plan;
pub mod protrusion;
pub mod rect;
pub mod stair;

use spanplan::core::edge::Edge;

pub(crate) fn print_edge(name: &str, edge: &Edge) {
    println!(
        "  {name:<20} building {:>9.1}mm   clearance {:>8.1}mm   row {:>9.1}mm",
        edge.building_length, edge.clearance, edge.scaffold_length
    );
}
