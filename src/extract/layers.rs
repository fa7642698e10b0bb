//! Page lookup and depth-first flattening of a Figma node tree.
//!
//! Node ids are assumed unique and non-empty; nothing here validates them.

use crate::core::errors::{AppError, AppResult};
use crate::core::types::{FigmaNode, LayerRecord, CANVAS_NODE_TYPE};

/// Returns the first top-level child that is a canvas named exactly `page_name`.
pub fn find_page<'a>(pages: &'a [FigmaNode], page_name: &str) -> AppResult<&'a FigmaNode> {
    pages
        .iter()
        .find(|node| node.name == page_name && node.node_type == CANVAS_NODE_TYPE)
        .ok_or_else(|| AppError::PageNotFound(page_name.to_string()))
}

/// Appends `node` and all of its descendants to `layers` in pre-order.
///
/// Pass an empty `parent_id` for the subtree root.
pub fn extract_layers(node: &FigmaNode, parent_id: &str, layers: &mut Vec<LayerRecord>) {
    layers.push(LayerRecord {
        id: node.id.clone(),
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        parent_id: parent_id.to_string(),
        absolute_bounding_box: node.absolute_bounding_box,
        styles: node.styles.clone(),
        constraints: node.constraints.clone(),
    });

    for child in &node.children {
        extract_layers(child, &node.id, layers);
    }
}

pub fn flatten_page(page: &FigmaNode) -> Vec<LayerRecord> {
    let mut layers = Vec::new();
    extract_layers(page, "", &mut layers);
    layers
}
