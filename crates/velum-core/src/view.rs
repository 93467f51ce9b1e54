//! Builder for host view-tree values.
//!
//! The host consumes plain [`Value`] trees shaped as
//! `{ type, props, events, views, layout }` maps. [`View`] is the ergonomic
//! way to produce them; everything it builds stays opaque data once
//! converted.

use std::rc::Rc;

use crate::value::{Props, Value};

#[derive(Clone, Debug)]
pub struct View {
    kind: String,
    props: Props,
    events: Props,
    children: Vec<Value>,
    layout: Option<&'static str>,
}

impl View {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            props: Props::new(),
            events: Props::new(),
            children: Vec::new(),
            layout: None,
        }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Registers `action` under `event` in the view's event map.
    pub fn action(mut self, event: impl Into<String>, action: Rc<dyn Fn()>) -> Self {
        self.events.insert(event.into(), Value::Action(action));
        self
    }

    pub fn child(mut self, child: impl Into<Value>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Fill-parent layout.
    pub fn fill(mut self) -> Self {
        self.layout = Some("fill");
        self
    }
}

impl From<View> for Value {
    fn from(view: View) -> Self {
        let mut map = Props::new();
        map.insert("type".to_owned(), Value::Str(view.kind));
        if !view.props.is_empty() {
            map.insert("props".to_owned(), Value::Map(view.props));
        }
        if !view.events.is_empty() {
            map.insert("events".to_owned(), Value::Map(view.events));
        }
        if !view.children.is_empty() {
            map.insert("views".to_owned(), Value::Array(view.children));
        }
        if let Some(layout) = view.layout {
            map.insert("layout".to_owned(), Value::from(layout));
        }
        Value::Map(map)
    }
}
