//! # Documentation Hierarchy Index
//!
//! Tooling for the `hierarchy.js` class-hierarchy index that Doxygen
//! generates next to HTML documentation: a single JavaScript literal of
//! nested `[ name, link, children ]` records feeding the documentation
//! site's collapsible tree widget.
//!
//! This module gives that artifact a data model ([`HierarchyNode`],
//! [`Hierarchy`]), a tolerant parser, and a writer that reproduces
//! Doxygen's output format byte for byte, so a parse/emit round trip of a
//! generated file is the identity. The tree is owned top-down, so it is
//! finite and acyclic by construction.
//!
//! The index shipped with this engine's documentation is available as
//! [`engine_hierarchy`] and kept under `assets/hierarchy.js`.

use serde_json::Value;

/// Maximum accepted nesting depth when parsing. Real indexes are a handful
/// of levels deep; the limit keeps hostile input from exhausting the stack.
pub const MAX_DEPTH: usize = 32;

/// Errors produced when reading a `hierarchy.js` index.
#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    /// The source does not start with a `var <name> =` assignment.
    #[error("missing `var <name> =` header")]
    MissingHeader,

    /// The assigned literal is not valid JSON.
    #[error("hierarchy body is not valid JSON")]
    Json(#[from] serde_json::Error),

    /// An entry does not have the `[ name, link, children ]` shape.
    #[error("malformed hierarchy entry: {0}")]
    Malformed(String),

    /// Nesting exceeds [`MAX_DEPTH`].
    #[error("hierarchy nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

/// One record of the documentation tree: a class or struct name, the
/// relative link to its documentation page, and its direct subclasses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    pub name: String,
    /// Relative page path, or `None` when the entry has no page.
    pub link: Option<String>,
    /// Direct subclasses, in documentation order. Empty for a leaf; the
    /// writer emits `null` for an empty list, matching Doxygen.
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Creates a leaf entry.
    pub fn leaf(name: &str, link: &str) -> Self {
        Self {
            name: name.to_string(),
            link: Some(link.to_string()),
            children: Vec::new(),
        }
    }

    /// Creates an entry with subclasses.
    pub fn branch(name: &str, link: &str, children: Vec<HierarchyNode>) -> Self {
        Self {
            name: name.to_string(),
            link: Some(link.to_string()),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(HierarchyNode::node_count).sum::<usize>()
    }

    fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(HierarchyNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Depth-first search for a node by exact name.
    pub fn find(&self, name: &str) -> Option<&HierarchyNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }
}

/// A complete `hierarchy.js` index: the ordered top-level entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hierarchy {
    pub roots: Vec<HierarchyNode>,
}

impl Hierarchy {
    /// Parses a `hierarchy.js` source.
    ///
    /// The parser is whitespace-tolerant: anything of the form
    /// `var <name> = <json array>;` is accepted, with each entry shaped
    /// `[ name, link-or-null, children-or-null ]`.
    pub fn parse(source: &str) -> Result<Self, HierarchyError> {
        let trimmed = source.trim_start_matches('\u{feff}').trim();
        let eq = trimmed.find('=').ok_or(HierarchyError::MissingHeader)?;
        let header = trimmed[..eq].trim();
        if !header.starts_with("var ") {
            return Err(HierarchyError::MissingHeader);
        }
        let body = trimmed[eq + 1..].trim();
        let body = body.strip_suffix(';').unwrap_or(body).trim_end();

        let value: Value = serde_json::from_str(body)?;
        let entries = value.as_array().ok_or_else(|| {
            HierarchyError::Malformed("top-level literal is not an array".to_string())
        })?;
        let roots = entries
            .iter()
            .map(|entry| convert_entry(entry, 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { roots })
    }

    /// Re-emits the index in Doxygen's output format.
    ///
    /// The result is byte-identical to what Doxygen writes for the same
    /// tree: LF line endings, entries indented by `4 + 2*depth` spaces,
    /// `null` for leaves, a comma after every entry except the last of its
    /// siblings, and no trailing newline after the closing `];`.
    pub fn to_js(&self) -> String {
        let mut out = String::from("var hierarchy =\n[\n");
        let count = self.roots.len();
        for (i, root) in self.roots.iter().enumerate() {
            write_entry(&mut out, root, 0, i + 1 == count);
        }
        out.push_str("];");
        out
    }

    /// Depth-first search across all roots for a node by exact name.
    pub fn find(&self, name: &str) -> Option<&HierarchyNode> {
        self.roots.iter().find_map(|root| root.find(name))
    }

    /// Total number of nodes in the index.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(HierarchyNode::node_count).sum()
    }

    /// Depth of the deepest node, with top-level entries at depth 1.
    pub fn max_depth(&self) -> usize {
        self.roots
            .iter()
            .map(HierarchyNode::depth)
            .max()
            .unwrap_or(0)
    }
}

fn convert_entry(value: &Value, depth: usize) -> Result<HierarchyNode, HierarchyError> {
    if depth > MAX_DEPTH {
        return Err(HierarchyError::TooDeep { limit: MAX_DEPTH });
    }
    let parts = value
        .as_array()
        .filter(|parts| parts.len() == 3)
        .ok_or_else(|| malformed(value, "expected [ name, link, children ]"))?;

    let name = parts[0]
        .as_str()
        .ok_or_else(|| malformed(value, "name is not a string"))?
        .to_string();

    let link = match &parts[1] {
        Value::Null => None,
        Value::String(link) => Some(link.clone()),
        _ => return Err(malformed(value, "link is neither a string nor null")),
    };

    let children = match &parts[2] {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .map(|item| convert_entry(item, depth + 1))
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(malformed(value, "children is neither an array nor null")),
    };

    Ok(HierarchyNode {
        name,
        link,
        children,
    })
}

fn malformed(value: &Value, reason: &str) -> HierarchyError {
    let mut rendered = value.to_string();
    if rendered.chars().count() > 80 {
        rendered = rendered.chars().take(77).collect();
        rendered.push_str("...");
    }
    HierarchyError::Malformed(format!("{reason}: {rendered}"))
}

fn write_entry(out: &mut String, node: &HierarchyNode, depth: usize, last: bool) {
    let indent = " ".repeat(4 + 2 * depth);
    out.push_str(&indent);
    out.push_str("[ ");
    out.push_str(&json_string(&node.name));
    out.push_str(", ");
    match &node.link {
        Some(link) => out.push_str(&json_string(link)),
        None => out.push_str("null"),
    }
    out.push_str(", ");
    if node.children.is_empty() {
        out.push_str("null ]");
    } else {
        out.push_str("[\n");
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            write_entry(out, child, depth + 1, i + 1 == count);
        }
        out.push_str(&indent);
        out.push_str("] ]");
    }
    if !last {
        out.push(',');
    }
    out.push('\n');
}

fn json_string(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

/// The class-hierarchy index shipped with this engine's documentation.
///
/// Serializing it with [`Hierarchy::to_js`] reproduces
/// `assets/hierarchy.js` byte for byte.
pub fn engine_hierarchy() -> Hierarchy {
    use HierarchyNode as N;

    Hierarchy {
        roots: vec![
            N::leaf("Eng::Base", "class_eng_1_1_base.html"),
            N::branch(
                "Object",
                "class_object.html",
                vec![
                    N::leaf("Material", "class_material.html"),
                    N::branch(
                        "Node",
                        "class_node.html",
                        vec![
                            N::branch(
                                "Camera",
                                "class_camera.html",
                                vec![
                                    N::leaf("OrthographicCamera", "class_orthographic_camera.html"),
                                    N::leaf("PerspectiveCamera", "class_perspective_camera.html"),
                                ],
                            ),
                            N::branch(
                                "Light",
                                "class_light.html",
                                vec![
                                    N::branch(
                                        "AttenuationLight",
                                        "class_attenuation_light.html",
                                        vec![
                                            N::leaf(
                                                "OmniDirectionalLight",
                                                "class_omni_directional_light.html",
                                            ),
                                            N::leaf("SpotLight", "class_spot_light.html"),
                                        ],
                                    ),
                                    N::leaf("DirectionalLight", "class_directional_light.html"),
                                ],
                            ),
                            N::leaf("Mesh", "class_mesh.html"),
                        ],
                    ),
                    N::leaf("RenderList", "class_render_list.html"),
                    N::branch(
                        "Texture",
                        "class_texture.html",
                        vec![N::leaf("Texture2D", "class_texture2_d.html")],
                    ),
                ],
            ),
            N::leaf("OvLight", "class_ov_light.html"),
            N::leaf("OvMesh", "class_ov_mesh.html"),
            N::leaf("OvObject", "class_ov_object.html"),
            N::leaf("OvoReader", "class_ovo_reader.html"),
            N::leaf("RenderNode", "struct_render_node.html"),
            N::leaf("Eng::Base::Reserved", "struct_eng_1_1_base_1_1_reserved.html"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC_INDEX: &str = include_str!("../../assets/hierarchy.js");

    #[test]
    fn parse_round_trips_byte_for_byte() {
        let hierarchy = Hierarchy::parse(DOC_INDEX).unwrap();
        assert_eq!(hierarchy.to_js(), DOC_INDEX);
    }

    #[test]
    fn engine_hierarchy_matches_the_shipped_index() {
        assert_eq!(engine_hierarchy().to_js(), DOC_INDEX);
        assert_eq!(
            Hierarchy::parse(DOC_INDEX).unwrap(),
            engine_hierarchy()
        );
    }

    #[test]
    fn node_has_camera_light_mesh_children() {
        let hierarchy = engine_hierarchy();
        let node = hierarchy.find("Node").unwrap();
        let names: Vec<&str> = node.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Camera", "Light", "Mesh"]);
    }

    #[test]
    fn object_children_keep_documentation_order() {
        let hierarchy = engine_hierarchy();
        let object = hierarchy.find("Object").unwrap();
        let names: Vec<&str> = object.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Material", "Node", "RenderList", "Texture"]);
    }

    #[test]
    fn attenuation_light_has_two_subclasses() {
        let hierarchy = engine_hierarchy();
        let light = hierarchy.find("AttenuationLight").unwrap();
        let names: Vec<&str> = light.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["OmniDirectionalLight", "SpotLight"]);
    }

    #[test]
    fn counts_and_depth() {
        let hierarchy = engine_hierarchy();
        assert_eq!(hierarchy.roots.len(), 8);
        assert_eq!(hierarchy.node_count(), 22);
        // Object -> Node -> Light -> AttenuationLight -> SpotLight
        assert_eq!(hierarchy.max_depth(), 5);
    }

    #[test]
    fn parse_accepts_compact_json_and_null_links() {
        let source = r#"var hierarchy = [["A",null,[["B","b.html",null]]]];"#;
        let hierarchy = Hierarchy::parse(source).unwrap();
        assert_eq!(hierarchy.roots.len(), 1);
        assert_eq!(hierarchy.roots[0].link, None);
        assert_eq!(hierarchy.roots[0].children[0].name, "B");
        // Emission normalizes to the generated layout.
        let expected = "var hierarchy =\n[\n    [ \"A\", null, [\n      [ \"B\", \"b.html\", null ]\n    ] ]\n];";
        assert_eq!(hierarchy.to_js(), expected);
    }

    #[test]
    fn missing_header_is_rejected() {
        assert!(matches!(
            Hierarchy::parse("[1, 2, 3]"),
            Err(HierarchyError::MissingHeader)
        ));
    }

    #[test]
    fn malformed_entries_are_rejected() {
        let short = r#"var hierarchy = [["OnlyName"]];"#;
        assert!(matches!(
            Hierarchy::parse(short),
            Err(HierarchyError::Malformed(_))
        ));
        let bad_link = r#"var hierarchy = [["A", 5, null]];"#;
        assert!(matches!(
            Hierarchy::parse(bad_link),
            Err(HierarchyError::Malformed(_))
        ));
        let bad_children = r#"var hierarchy = [["A", "a.html", "nope"]];"#;
        assert!(matches!(
            Hierarchy::parse(bad_children),
            Err(HierarchyError::Malformed(_))
        ));
    }

    #[test]
    fn excessive_nesting_is_rejected() {
        let mut body = String::new();
        for _ in 0..(MAX_DEPTH + 2) {
            body.push_str(r#"["deep", null, ["#);
        }
        body.push_str(r#"["leaf", null, null]"#);
        for _ in 0..(MAX_DEPTH + 2) {
            body.push_str("]]");
        }
        let source = format!("var hierarchy = [{body}];");
        assert!(matches!(
            Hierarchy::parse(&source),
            Err(HierarchyError::TooDeep { .. })
        ));
    }
}
