//! View and component abstraction over the render surface.
//!
//! A [`View`] knows how to produce its template lines and how to turn a key
//! into a signal. A [`Component`] wraps a view together with the surface node
//! created from it; the node is created lazily the first time it is needed.
//!
//! The free functions [`render`], [`remove`], and [`replace`] are the only
//! way presenters touch the surface tree.

use crate::ui::surface::{NodeId, RenderPosition, Surface};

/// Semantic color role of a span; the theme maps tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Dim,
    Accent,
    Title,
    Favorite,
    Checked,
    Disabled,
    Message,
}

/// A run of text in one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Normal)
    }
}

/// One terminal row of a template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    #[must_use]
    pub const fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// A single normal-toned span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(vec![Span::normal(text)])
    }

    /// Concatenated text of all spans.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| span.text.chars().count()).sum()
    }
}

/// A declarative view.
pub trait View {
    /// What the view emits in response to input.
    type Signal;

    /// Lines to paint for the current view state.
    fn template(&self) -> Vec<Line>;

    /// Maps a key to a signal. Views without input return `None`.
    fn on_key(&self, _key: char) -> Option<Self::Signal> {
        None
    }
}

/// A view plus the surface node created from it.
#[derive(Debug)]
pub struct Component<V: View> {
    view: V,
    element: Option<NodeId>,
}

impl<V: View> Component<V> {
    pub const fn new(view: V) -> Self {
        Self {
            view,
            element: None,
        }
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view state. Call [`Component::refresh`] afterwards
    /// to repaint an existing element.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The component's node, created from the template on first use.
    pub fn element(&mut self, surface: &mut Surface) -> NodeId {
        match self.element {
            Some(id) if surface.contains(id) => id,
            _ => {
                let id = surface.create_element(self.view.template());
                self.element = Some(id);
                id
            }
        }
    }

    /// The node, if one has been created.
    pub const fn element_id(&self) -> Option<NodeId> {
        self.element
    }

    /// Re-templates the existing node in place.
    pub fn refresh(&self, surface: &mut Surface) {
        if let Some(id) = self.element {
            surface.update(id, self.view.template());
        }
    }

    pub fn on_key(&self, key: char) -> Option<V::Signal> {
        self.view.on_key(key)
    }
}

/// Mounts `component` into `container`.
pub fn render<V: View>(
    surface: &mut Surface,
    component: &mut Component<V>,
    container: NodeId,
    position: RenderPosition,
) -> bool {
    let element = component.element(surface);
    surface.attach(element, container, position)
}

/// Drops `component`'s node. Safe to call repeatedly.
pub fn remove<V: View>(surface: &mut Surface, component: &mut Component<V>) {
    if let Some(id) = component.element.take() {
        surface.remove(id);
    }
}

/// Puts `new`'s node where `old`'s node is mounted.
pub fn replace<A: View, B: View>(
    surface: &mut Surface,
    new: &mut Component<A>,
    old: &mut Component<B>,
) -> bool {
    let new_element = new.element(surface);
    let old_element = old.element(surface);
    surface.replace(new_element, old_element)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    impl View for Counter {
        type Signal = u32;

        fn template(&self) -> Vec<Line> {
            vec![Line::plain(format!("count {}", self.0))]
        }

        fn on_key(&self, key: char) -> Option<u32> {
            (key == '+').then_some(self.0 + 1)
        }
    }

    #[test]
    fn element_is_created_once() {
        let mut surface = Surface::new();
        let mut component = Component::new(Counter(1));

        let first = component.element(&mut surface);
        let second = component.element(&mut surface);

        assert_eq!(first, second);
        assert_eq!(surface.text(first), "count 1");
    }

    #[test]
    fn refresh_repaints_in_place() {
        let mut surface = Surface::new();
        let root = surface.root();
        let mut component = Component::new(Counter(1));
        render(&mut surface, &mut component, root, RenderPosition::BeforeEnd);

        component.view_mut().0 = 5;
        component.refresh(&mut surface);

        let id = component.element_id().unwrap();
        assert_eq!(surface.text(id), "count 5");
        assert_eq!(surface.render_count(), 1);
    }

    #[test]
    fn removed_component_gets_a_fresh_element() {
        let mut surface = Surface::new();
        let mut component = Component::new(Counter(1));
        let first = component.element(&mut surface);

        remove(&mut surface, &mut component);
        remove(&mut surface, &mut component);

        assert!(component.element_id().is_none());
        assert_ne!(component.element(&mut surface), first);
    }

    #[test]
    fn replace_swaps_components() {
        let mut surface = Surface::new();
        let mut display = Component::new(Counter(1));
        let mut edit = Component::new(Counter(2));
        let root = surface.root();
        render(&mut surface, &mut display, root, RenderPosition::BeforeEnd);

        assert!(replace(&mut surface, &mut edit, &mut display));

        let edit_id = edit.element_id().unwrap();
        assert_eq!(surface.children(root), &[edit_id]);
        assert_eq!(edit.on_key('+'), Some(3));
        assert_eq!(edit.on_key('-'), None);
    }
}
