//! Retained render surface.
//!
//! The surface is a tree of element nodes that presenters mount, move, replace,
//! and remove. Each node carries its own template lines; painting walks the
//! tree in document order and emits the lines of every visible node.
//!
//! ```text
//! root
//! ├── filters container
//! │   └── filter control
//! └── list container
//!     ├── sort control         (mounted with AfterBegin)
//!     ├── point list
//!     │   ├── point row
//!     │   └── point editor
//!     └── empty-list message
//! ```
//!
//! Nodes are owned by the surface arena and addressed by [`NodeId`]. A node can
//! exist detached (created but not mounted, or swapped out by
//! [`Surface::replace`]) until [`Surface::remove`] drops it.
//!
//! Every [`Surface::attach`] call bumps [`Surface::render_count`], which lets
//! callers check that a transition did not re-mount anything.

use crate::ui::component::Line;
use std::collections::HashMap;

/// Handle of a node in the surface arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// Where [`Surface::attach`] places a node inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPosition {
    /// First child of the container.
    AfterBegin,
    /// Last child of the container.
    #[default]
    BeforeEnd,
}

#[derive(Debug, Clone, Default)]
struct Node {
    template: Vec<Line>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    hidden: bool,
}

/// The element tree.
#[derive(Debug, Clone)]
pub struct Surface {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
    render_count: usize,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Creates a surface holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, Node::default());
        Self {
            nodes,
            root,
            next_id: 1,
            render_count: 0,
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of [`Surface::attach`] calls that mounted a node.
    #[must_use]
    pub const fn render_count(&self) -> usize {
        self.render_count
    }

    /// Creates an empty container and appends it to `parent`.
    ///
    /// Containers are application chrome and do not count as renders.
    pub fn create_container(&mut self, parent: NodeId) -> NodeId {
        let id = self.create_element(Vec::new());
        if !self.link(id, parent, RenderPosition::BeforeEnd) {
            tracing::warn!(parent = ?parent, "container parent missing, container left detached");
        }
        id
    }

    /// Creates a detached node with the given template.
    pub fn create_element(&mut self, template: Vec<Line>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                template,
                ..Node::default()
            },
        );
        id
    }

    /// Mounts `node` into `container` at `position`.
    ///
    /// A node that is already attached somewhere is moved. Returns `false` and
    /// leaves the tree unchanged when either node does not exist or when the
    /// container lives inside `node`'s own subtree.
    pub fn attach(&mut self, node: NodeId, container: NodeId, position: RenderPosition) -> bool {
        if !self.link(node, container, position) {
            tracing::warn!(node = ?node, container = ?container, "cannot attach node");
            return false;
        }
        self.render_count += 1;
        true
    }

    fn link(&mut self, node: NodeId, container: NodeId, position: RenderPosition) -> bool {
        if node == self.root
            || !self.nodes.contains_key(&node)
            || !self.nodes.contains_key(&container)
            || self.is_within(container, node)
        {
            return false;
        }

        self.detach(node);

        if let Some(parent) = self.nodes.get_mut(&container) {
            match position {
                RenderPosition::AfterBegin => parent.children.insert(0, node),
                RenderPosition::BeforeEnd => parent.children.push(node),
            }
        }
        if let Some(child) = self.nodes.get_mut(&node) {
            child.parent = Some(container);
        }
        true
    }

    /// Whether `node` is `ancestor` or lies below it.
    #[must_use]
    pub fn is_within(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    fn detach(&mut self, node: NodeId) {
        let parent = self.nodes.get_mut(&node).and_then(|n| n.parent.take());
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| *child != node);
        }
    }

    /// Detaches `node` and drops it with its whole subtree.
    ///
    /// Removing a node that no longer exists is a no-op.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.root || !self.nodes.contains_key(&node) {
            return;
        }
        self.detach(node);

        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.nodes.remove(&id) {
                stack.extend(removed.children);
            }
        }
    }

    /// Puts `new` into the slot `old` occupies.
    ///
    /// `old` becomes detached but stays alive so it can be swapped back later.
    /// Does not count as a render. Returns `false` when `old` is not mounted.
    pub fn replace(&mut self, new: NodeId, old: NodeId) -> bool {
        if new == old {
            return true;
        }
        let Some(parent) = self.nodes.get(&old).and_then(|n| n.parent) else {
            tracing::warn!(old = ?old, "cannot replace an unmounted node");
            return false;
        };
        if !self.nodes.contains_key(&new) || self.is_within(parent, new) {
            tracing::warn!(new = ?new, "cannot replace with a missing or enclosing node");
            return false;
        }

        self.detach(new);
        let Some(index) = self
            .nodes
            .get(&parent)
            .and_then(|p| p.children.iter().position(|child| *child == old))
        else {
            return false;
        };

        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children[index] = new;
        }
        if let Some(n) = self.nodes.get_mut(&old) {
            n.parent = None;
        }
        if let Some(n) = self.nodes.get_mut(&new) {
            n.parent = Some(parent);
        }
        true
    }

    /// Swaps the template of an existing node in place.
    pub fn update(&mut self, node: NodeId, template: Vec<Line>) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.template = template;
        }
    }

    /// Hidden nodes stay mounted but are skipped, with their subtree, when painting.
    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.hidden = hidden;
        }
    }

    #[must_use]
    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.hidden)
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Whether `node` is reachable from the root.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.contains(node) && self.is_within(node, self.root)
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    /// Children of `node` in document order; empty for unknown nodes.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(&node).map_or(&[], |n| n.children.as_slice())
    }

    /// Plain text of `node`'s own template, one line per row.
    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.nodes.get(&node).map_or_else(String::new, |n| {
            n.template
                .iter()
                .map(Line::text)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    /// Lines of every visible node, in document order, tagged with the node
    /// that produced them.
    #[must_use]
    pub fn visible_lines(&self) -> Vec<(NodeId, &Line)> {
        let mut lines = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(&id) else {
                continue;
            };
            if node.hidden {
                continue;
            }
            lines.extend(node.template.iter().map(|line| (id, line)));
            stack.extend(node.children.iter().rev());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(surface: &mut Surface, text: &str) -> NodeId {
        surface.create_element(vec![Line::plain(text)])
    }

    fn texts(surface: &Surface) -> Vec<String> {
        surface
            .visible_lines()
            .into_iter()
            .map(|(_, line)| line.text())
            .collect()
    }

    #[test]
    fn attach_appends_or_prepends() {
        let mut surface = Surface::new();
        let list = surface.create_container(surface.root());
        let a = element(&mut surface, "a");
        let b = element(&mut surface, "b");
        let c = element(&mut surface, "c");

        surface.attach(a, list, RenderPosition::BeforeEnd);
        surface.attach(b, list, RenderPosition::BeforeEnd);
        surface.attach(c, list, RenderPosition::AfterBegin);

        assert_eq!(surface.children(list), &[c, a, b]);
        assert_eq!(surface.render_count(), 3);
        assert_eq!(texts(&surface), vec!["c", "a", "b"]);
    }

    #[test]
    fn attaching_a_mounted_node_moves_it() {
        let mut surface = Surface::new();
        let list = surface.create_container(surface.root());
        let a = element(&mut surface, "a");
        let b = element(&mut surface, "b");
        surface.attach(a, list, RenderPosition::BeforeEnd);
        surface.attach(b, list, RenderPosition::BeforeEnd);

        surface.attach(a, list, RenderPosition::BeforeEnd);

        assert_eq!(surface.children(list), &[b, a]);
    }

    #[test]
    fn cannot_attach_into_own_subtree() {
        let mut surface = Surface::new();
        let outer = surface.create_container(surface.root());
        let inner = surface.create_container(outer);

        assert!(!surface.attach(outer, inner, RenderPosition::BeforeEnd));
        assert_eq!(surface.parent(outer), Some(surface.root()));
        assert_eq!(surface.render_count(), 0);
    }

    #[test]
    fn remove_drops_subtree_and_is_idempotent() {
        let mut surface = Surface::new();
        let list = surface.create_container(surface.root());
        let row = element(&mut surface, "row");
        let child = element(&mut surface, "child");
        surface.attach(row, list, RenderPosition::BeforeEnd);
        surface.attach(child, row, RenderPosition::BeforeEnd);

        surface.remove(row);
        surface.remove(row);

        assert!(!surface.contains(row));
        assert!(!surface.contains(child));
        assert!(surface.children(list).is_empty());
    }

    #[test]
    fn replace_keeps_slot_and_old_node() {
        let mut surface = Surface::new();
        let list = surface.create_container(surface.root());
        let a = element(&mut surface, "a");
        let b = element(&mut surface, "b");
        let edit = element(&mut surface, "edit");
        surface.attach(a, list, RenderPosition::BeforeEnd);
        surface.attach(b, list, RenderPosition::BeforeEnd);
        let renders = surface.render_count();

        assert!(surface.replace(edit, a));

        assert_eq!(surface.children(list), &[edit, b]);
        assert!(surface.contains(a));
        assert!(!surface.is_attached(a));
        assert_eq!(surface.render_count(), renders);

        assert!(surface.replace(a, edit));
        assert_eq!(surface.children(list), &[a, b]);
    }

    #[test]
    fn replacing_an_unmounted_node_fails() {
        let mut surface = Surface::new();
        let a = element(&mut surface, "a");
        let b = element(&mut surface, "b");

        assert!(!surface.replace(b, a));
        assert!(!surface.is_attached(b));
    }

    #[test]
    fn hidden_nodes_are_skipped_with_children() {
        let mut surface = Surface::new();
        let list = surface.create_container(surface.root());
        let sort = element(&mut surface, "sort");
        let row = element(&mut surface, "row");
        let nested = element(&mut surface, "nested");
        surface.attach(sort, list, RenderPosition::BeforeEnd);
        surface.attach(row, list, RenderPosition::BeforeEnd);
        surface.attach(nested, sort, RenderPosition::BeforeEnd);

        surface.set_hidden(sort, true);

        assert_eq!(texts(&surface), vec!["row"]);
        assert!(surface.is_attached(sort));
    }

    #[test]
    fn update_rewrites_template_without_render() {
        let mut surface = Surface::new();
        let a = element(&mut surface, "before");
        surface.update(a, vec![Line::plain("after")]);
        assert_eq!(surface.text(a), "after");
        assert_eq!(surface.render_count(), 0);
    }
}
