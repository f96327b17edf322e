use std::fmt;

use tracing::debug;

use crate::media::RenderUpdate;

/// Scene identifiers are an open set: whatever the selector hands us.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneId(String);

impl SceneId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SceneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SceneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exactly one scene is active at a time. Starts on the landing scene.
#[derive(Debug)]
pub struct SceneRouter {
    scenes: Vec<SceneId>,
    landing: SceneId,
    current: SceneId,
}

impl SceneRouter {
    pub fn new(scenes: Vec<SceneId>, landing: SceneId) -> Self {
        Self {
            scenes,
            current: landing.clone(),
            landing,
        }
    }

    pub fn current(&self) -> &SceneId {
        &self.current
    }

    pub fn scenes(&self) -> &[SceneId] {
        &self.scenes
    }

    pub fn landing(&self) -> &SceneId {
        &self.landing
    }

    pub fn is_landing(&self) -> bool {
        self.current == self.landing
    }

    /// Switch to `id`. Unknown ids are ignored.
    pub fn show_scene(&mut self, id: &str) -> Vec<RenderUpdate> {
        let Some(scene) = self.scenes.iter().find(|s| s.as_str() == id) else {
            debug!(scene = id, "unknown scene ignored");
            return Vec::new();
        };
        self.current = scene.clone();
        debug!(scene = %self.current, "scene shown");

        let mut updates = vec![RenderUpdate::Scene(self.current.to_string())];
        if self.is_landing() {
            updates.push(RenderUpdate::SceneSelectorReset);
        }
        updates
    }

    /// Step through the scene list in selector order, wrapping at both ends.
    pub fn cycle(&mut self, forward: bool) -> Vec<RenderUpdate> {
        if self.scenes.is_empty() {
            return Vec::new();
        }
        let pos = self
            .scenes
            .iter()
            .position(|s| *s == self.current)
            .unwrap_or(0) as i64;
        let step = if forward { 1 } else { -1 };
        let next = crate::media::wrap_index(pos + step, self.scenes.len());
        let id = self.scenes[next].to_string();
        self.show_scene(&id)
    }
}
