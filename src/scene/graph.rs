//! Arena-backed scene tree.

use cgmath::{Matrix4, SquareMatrix};

use super::node::{NodeId, SceneNode};
use crate::error::EngineError;

/// The scene tree: an id-indexed arena of [`SceneNode`]s rooted at a
/// grouping node.
///
/// Removed slots stay empty rather than being recycled, so a stale
/// [`NodeId`] can never silently alias a newer node.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<Option<SceneNode>>,
    root: NodeId,
}

impl SceneGraph {
    /// Creates a graph containing a single root group at the origin.
    pub fn new() -> Self {
        let root = SceneNode::group_at_origin("root");
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
        }
    }

    /// Id of the root group.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes, including the root.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    /// Borrows a node.
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index()).and_then(|slot| slot.as_ref())
    }

    /// Mutably borrows a node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index()).and_then(|slot| slot.as_mut())
    }

    /// Attaches `node` as the last child of `parent`.
    pub fn attach(&mut self, parent: NodeId, node: SceneNode) -> Result<NodeId, EngineError> {
        if self.get(parent).is_none() {
            return Err(EngineError::NodeNotFound(parent));
        }
        let id = NodeId(self.nodes.len() as u32);
        let mut node = node;
        node.parent = Some(parent);
        self.nodes.push(Some(node));
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.push(id);
        }
        Ok(id)
    }

    /// Unlinks `id` from its parent. The subtree below `id` stays alive;
    /// detaching the root is a no-op.
    pub fn detach(&mut self, id: NodeId) -> Result<(), EngineError> {
        let parent = match self.get(id) {
            Some(node) => node.parent,
            None => return Err(EngineError::NodeNotFound(id)),
        };
        if let Some(parent) = parent {
            if let Some(parent_node) = self.get_mut(parent) {
                parent_node.children.retain(|child| *child != id);
            }
            if let Some(node) = self.get_mut(id) {
                node.parent = None;
            }
        }
        Ok(())
    }

    /// Removes `id` and its whole subtree. Returns the number of nodes
    /// removed; removing the root is refused.
    pub fn remove(&mut self, id: NodeId) -> Result<usize, EngineError> {
        if id == self.root {
            return Err(EngineError::NodeNotFound(id));
        }
        self.detach(id)?;
        Ok(self.clear_subtree(id))
    }

    fn clear_subtree(&mut self, id: NodeId) -> usize {
        let children = match self.nodes.get_mut(id.index()).and_then(|slot| slot.take()) {
            Some(node) => node.children,
            None => return 0,
        };
        let mut removed = 1;
        for child in children {
            removed += self.clear_subtree(child);
        }
        removed
    }

    /// Children ids of `id`, in attachment order.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|node| node.children()).unwrap_or(&[])
    }

    /// Parent id of `id`.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Searches the *direct* children of `parent` for the node `id`.
    ///
    /// Deliberately shallow: deeper descendants are not visited.
    pub fn child_by_id(&self, parent: NodeId, id: NodeId) -> Option<NodeId> {
        self.children_of(parent).iter().copied().find(|child| *child == id)
    }

    /// Collects every node below `start` whose name equals `name`.
    ///
    /// Direct children are reported before any deeper matches, and each
    /// child's subtree is visited in attachment order.
    pub fn find_by_name(&self, start: NodeId, name: &str) -> Vec<NodeId> {
        let mut matches = Vec::new();
        for child in self.children_of(start) {
            if let Some(node) = self.get(*child) {
                if node.name == name {
                    matches.push(*child);
                }
            }
        }
        for child in self.children_of(start) {
            matches.extend(self.find_by_name(*child, name));
        }
        matches
    }

    /// World-coordinate matrix of `id`: the composition of every local
    /// transform from the root down to the node.
    pub fn world_matrix(&self, id: NodeId) -> Option<Matrix4<f32>> {
        let node = self.get(id)?;
        let local = node.transform;
        match node.parent {
            Some(parent) => self.world_matrix(parent).map(|world| world * local),
            None => Some(local),
        }
    }

    /// Iterates live nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|node| (NodeId(index as u32), node)))
    }

    /// Preorder traversal from `start`, yielding each node with its world
    /// matrix.
    pub fn flatten(&self, start: NodeId) -> Vec<(NodeId, Matrix4<f32>)> {
        let mut out = Vec::new();
        let base = match self.parent_of(start) {
            Some(parent) => self
                .world_matrix(parent)
                .unwrap_or_else(Matrix4::identity),
            None => Matrix4::identity(),
        };
        self.flatten_into(start, base, &mut out);
        out
    }

    fn flatten_into(&self, id: NodeId, parent_matrix: Matrix4<f32>, out: &mut Vec<(NodeId, Matrix4<f32>)>) {
        let node = match self.get(id) {
            Some(node) => node,
            None => return,
        };
        let world = parent_matrix * node.transform;
        out.push((id, world));
        for child in node.children().to_vec() {
            self.flatten_into(child, world, out);
        }
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn group(name: &str) -> SceneNode {
        SceneNode::group_at_origin(name)
    }

    #[test]
    fn attach_and_count() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.attach(root, group("a")).unwrap();
        let _b = graph.attach(a, group("b")).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.children_of(root), &[a]);
        assert_eq!(graph.parent_of(a), Some(root));
    }

    #[test]
    fn attach_to_missing_parent_fails() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.attach(root, group("a")).unwrap();
        graph.remove(a).unwrap();
        assert!(graph.attach(a, group("orphan")).is_err());
    }

    #[test]
    fn detach_keeps_subtree() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.attach(root, group("a")).unwrap();
        let b = graph.attach(a, group("b")).unwrap();
        graph.detach(a).unwrap();
        assert!(graph.children_of(root).is_empty());
        assert!(graph.get(a).is_some());
        assert!(graph.get(b).is_some());
        assert_eq!(graph.parent_of(a), None);
    }

    #[test]
    fn remove_clears_subtree() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.attach(root, group("a")).unwrap();
        let b = graph.attach(a, group("b")).unwrap();
        let _c = graph.attach(b, group("c")).unwrap();
        assert_eq!(graph.remove(a).unwrap(), 3);
        assert_eq!(graph.len(), 1);
        assert!(graph.get(b).is_none());
    }

    #[test]
    fn child_by_id_is_shallow() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.attach(root, group("a")).unwrap();
        let b = graph.attach(a, group("b")).unwrap();
        assert_eq!(graph.child_by_id(root, a), Some(a));
        // Grandchildren are not visible from the root.
        assert_eq!(graph.child_by_id(root, b), None);
    }

    #[test]
    fn find_by_name_reports_shallow_matches_first() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.attach(root, group("pawn")).unwrap();
        let other = graph.attach(root, group("board")).unwrap();
        let nested = graph.attach(other, group("pawn")).unwrap();
        let matches = graph.find_by_name(root, "pawn");
        assert_eq!(matches, vec![a, nested]);
    }

    #[test]
    fn world_matrix_composes_root_down() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.attach(
            root,
            SceneNode::group("a", Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0))),
        )
        .unwrap();
        let b = graph.attach(
            a,
            SceneNode::group("b", Matrix4::from_translation(Vector3::new(0.0, 2.0, 0.0))),
        )
        .unwrap();
        let world = graph.world_matrix(b).unwrap();
        let expected = Matrix4::from_translation(Vector3::new(1.0, 2.0, 0.0));
        assert_eq!(world, expected);
    }

    #[test]
    fn flatten_visits_preorder() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.attach(root, group("a")).unwrap();
        let b = graph.attach(a, group("b")).unwrap();
        let c = graph.attach(root, group("c")).unwrap();
        let order: Vec<NodeId> = graph.flatten(root).into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![root, a, b, c]);
    }
}
