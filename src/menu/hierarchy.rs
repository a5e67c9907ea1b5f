//! Menu hierarchy model.
//!
//! A [`MenuHierarchy`] is a static tree of named entries built once at start-up
//! and addressed by stable [`MenuNodeHandle`]s. The root is never displayed as an
//! entry: its name is the title of the top level and its children are the
//! top-level lines.
//!
//! Hierarchies can be assembled in code or loaded from a [`MenuDescription`]:
//!
//! ```rust,ignore
//! let hierarchy = MenuHierarchy::from_json_str(r#"{
//!     "name": "Menu",
//!     "children": [
//!         { "name": "Items", "children": [ { "name": "Potion" }, { "name": "Back", "back": true } ] },
//!         { "name": "Close", "back": true }
//!     ]
//! }"#)?;
//! ```

use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::errors::{QuickMenuError, Result};
use crate::events::EventHub;

new_key_type! {
    /// Stable handle of one menu entry.
    pub struct MenuNodeHandle;
}

/// Payload delivered to node actions and to the menu-wide activation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuActivation {
    pub node: MenuNodeHandle,
    pub name: String,
    /// 0 for entries directly under the root.
    pub depth: usize,
}

/// Per-entry action: every listener runs once when the entry is activated.
pub type MenuAction = EventHub<MenuActivation>;

/// One entry of the menu.
#[derive(Debug)]
pub struct MenuNode {
    name: String,
    parent: Option<MenuNodeHandle>,
    children: SmallVec<[MenuNodeHandle; 8]>,
    back: bool,
    action: MenuAction,
}

impl MenuNode {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<MenuNodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[MenuNodeHandle] {
        &self.children
    }

    /// Confirming a back entry returns to the parent level instead of descending.
    #[inline]
    #[must_use]
    pub fn is_back(&self) -> bool {
        self.back
    }

    #[inline]
    #[must_use]
    pub fn action(&self) -> &MenuAction {
        &self.action
    }
}

/// Serializable authoring form of a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDescription {
    pub name: String,
    #[serde(default)]
    pub back: bool,
    #[serde(default)]
    pub children: Vec<MenuDescription>,
}

impl MenuDescription {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            back: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn back(name: impl Into<String>) -> Self {
        Self {
            back: true,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<MenuDescription>) -> Self {
        self.children = children;
        self
    }
}

/// The menu tree.
#[derive(Debug)]
pub struct MenuHierarchy {
    nodes: SlotMap<MenuNodeHandle, MenuNode>,
    root: MenuNodeHandle,
}

impl MenuHierarchy {
    /// Creates a hierarchy holding only its root.
    pub fn new(root_name: impl Into<String>) -> Result<Self> {
        let name = validate_name(root_name.into())?;
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(MenuNode {
            name,
            parent: None,
            children: SmallVec::new(),
            back: false,
            action: MenuAction::new(),
        });
        Ok(Self { nodes, root })
    }

    pub fn from_description(description: &MenuDescription) -> Result<Self> {
        if description.back {
            return Err(QuickMenuError::BackRoot(description.name.clone()));
        }
        let mut hierarchy = Self::new(description.name.clone())?;
        let root = hierarchy.root;
        hierarchy.insert_description_children(root, description)?;
        hierarchy.validate()?;
        Ok(hierarchy)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let description: MenuDescription = serde_json::from_str(json)?;
        Self::from_description(&description)
    }

    fn insert_description_children(
        &mut self,
        parent: MenuNodeHandle,
        description: &MenuDescription,
    ) -> Result<()> {
        for child in &description.children {
            let handle = if child.back {
                self.add_back(parent, child.name.clone())?
            } else {
                self.add(parent, child.name.clone())?
            };
            self.insert_description_children(handle, child)?;
        }
        Ok(())
    }

    /// Appends a regular entry under `parent`.
    pub fn add(&mut self, parent: MenuNodeHandle, name: impl Into<String>) -> Result<MenuNodeHandle> {
        self.insert(parent, name.into(), false)
    }

    /// Appends a back entry under `parent`.
    pub fn add_back(&mut self, parent: MenuNodeHandle, name: impl Into<String>) -> Result<MenuNodeHandle> {
        self.insert(parent, name.into(), true)
    }

    fn insert(&mut self, parent: MenuNodeHandle, name: String, back: bool) -> Result<MenuNodeHandle> {
        let name = validate_name(name)?;
        let parent_node = self
            .nodes
            .get(parent)
            .ok_or_else(|| QuickMenuError::NodeNotFound(format!("{parent:?}")))?;
        if parent_node.back {
            return Err(QuickMenuError::BackNodeWithChildren(parent_node.name.clone()));
        }

        let handle = self.nodes.insert(MenuNode {
            name,
            parent: Some(parent),
            children: SmallVec::new(),
            back,
            action: MenuAction::new(),
        });
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        Ok(handle)
    }

    /// Checks the structural rules the menu relies on.
    pub fn validate(&self) -> Result<()> {
        let root = &self.nodes[self.root];
        if root.children.is_empty() {
            return Err(QuickMenuError::EmptyRoot(root.name.clone()));
        }
        for (_, node) in &self.nodes {
            if node.back && !node.children.is_empty() {
                return Err(QuickMenuError::BackNodeWithChildren(node.name.clone()));
            }
        }
        Ok(())
    }

    // ========== Queries ==========

    #[inline]
    #[must_use]
    pub fn root(&self) -> MenuNodeHandle {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, handle: MenuNodeHandle) -> Option<&MenuNode> {
        self.nodes.get(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn name(&self, handle: MenuNodeHandle) -> Option<&str> {
        self.get(handle).map(MenuNode::name)
    }

    #[must_use]
    pub fn parent(&self, handle: MenuNodeHandle) -> Option<MenuNodeHandle> {
        self.get(handle).and_then(MenuNode::parent)
    }

    #[must_use]
    pub fn children(&self, handle: MenuNodeHandle) -> &[MenuNodeHandle] {
        self.get(handle).map(MenuNode::children).unwrap_or_default()
    }

    #[must_use]
    pub fn child(&self, handle: MenuNodeHandle, index: usize) -> Option<MenuNodeHandle> {
        self.children(handle).get(index).copied()
    }

    #[must_use]
    pub fn is_back(&self, handle: MenuNodeHandle) -> bool {
        self.get(handle).is_some_and(MenuNode::is_back)
    }

    /// The action list of `handle`. Subscribe to it to bind behavior.
    #[must_use]
    pub fn action(&self, handle: MenuNodeHandle) -> Option<&MenuAction> {
        self.get(handle).map(MenuNode::action)
    }

    /// Position of `handle` among its siblings (0 for the root).
    #[must_use]
    pub fn sibling_index(&self, handle: MenuNodeHandle) -> usize {
        self.parent(handle)
            .and_then(|p| self.children(p).iter().position(|&c| c == handle))
            .unwrap_or(0)
    }

    /// Number of ancestors below the root: 0 for the top level.
    #[must_use]
    pub fn depth(&self, handle: MenuNodeHandle) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent(handle);
        while let Some(p) = cursor {
            if p == self.root {
                break;
            }
            depth += 1;
            cursor = self.parent(p);
        }
        depth
    }

    /// Slash-separated names from the root down to `handle`.
    #[must_use]
    pub fn path_of(&self, handle: MenuNodeHandle) -> String {
        let mut names = Vec::new();
        let mut cursor = Some(handle);
        while let Some(h) = cursor {
            let Some(node) = self.get(h) else { break };
            names.push(node.name.as_str());
            cursor = node.parent;
        }
        names.reverse();
        names.join("/")
    }

    /// First entry named `name` in depth-first display order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<MenuNodeHandle> {
        self.iter_depth_first()
            .find(|&h| self.name(h) == Some(name))
    }

    /// Resolves a path such as `"Menu/Items/Potion"`. The first segment must
    /// name the root.
    pub fn find_by_path(&self, path: &str) -> Result<MenuNodeHandle> {
        let not_found = || QuickMenuError::NodeNotFound(path.to_string());
        let mut segments = path.split('/');
        if segments.next() != self.name(self.root) {
            return Err(not_found());
        }
        segments.try_fold(self.root, |current, segment| {
            self.children(current)
                .iter()
                .copied()
                .find(|&c| self.name(c) == Some(segment))
                .ok_or_else(not_found)
        })
    }

    /// All entries below the root in display order.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = MenuNodeHandle> + '_ {
        let mut stack: Vec<MenuNodeHandle> = self.children(self.root).iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }
}

fn validate_name(name: String) -> Result<String> {
    if name.trim().is_empty() || name.contains(['\n', '\r']) {
        return Err(QuickMenuError::InvalidNodeName(name));
    }
    Ok(name)
}
