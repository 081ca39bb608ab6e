use std::borrow::Cow;

use sprig_ids::NodeID;
use sprig_structs::UiRect;

/// Opacity container. Alpha is applied to the node and everything under it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGroup {
    pub alpha: f32,
}

impl Default for CanvasGroup {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SceneNodeData {
    #[default]
    Node,
    CanvasGroup(CanvasGroup),
    UiRect(UiRect),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub name: Cow<'static, str>,
    pub parent: NodeID,
    pub children: Vec<NodeID>,
    pub data: SceneNodeData,
}

impl SceneNode {
    pub fn new(name: impl Into<Cow<'static, str>>, data: SceneNodeData) -> Self {
        Self {
            name: name.into(),
            parent: NodeID::nil(),
            children: Vec::new(),
            data,
        }
    }

    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, SceneNodeData::Node)
    }

    pub fn canvas_group(&self) -> Option<&CanvasGroup> {
        match &self.data {
            SceneNodeData::CanvasGroup(group) => Some(group),
            _ => None,
        }
    }

    pub fn canvas_group_mut(&mut self) -> Option<&mut CanvasGroup> {
        match &mut self.data {
            SceneNodeData::CanvasGroup(group) => Some(group),
            _ => None,
        }
    }

    pub fn ui_rect(&self) -> Option<&UiRect> {
        match &self.data {
            SceneNodeData::UiRect(rect) => Some(rect),
            _ => None,
        }
    }
}
