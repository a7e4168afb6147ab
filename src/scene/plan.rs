use std::collections::BTreeSet;
use std::path::Path;

use crate::foundation::error::{ForgeError, ForgeResult};
use crate::scene::composer::Composer;
use crate::scene::hero_home::HeroHomeScene;
use crate::scene::hero_locations::HeroLocationsScene;
use crate::scene::location_card::LocationCardScene;

/// Every scene of one batch, in generation order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BatchPlan {
    /// Home page banner, generated first.
    pub hero_home: HeroHomeScene,
    /// Locations page banner, generated second.
    pub hero_locations: HeroLocationsScene,
    /// Location cards, generated last in list order.
    pub cards: Vec<LocationCardScene>,
}

impl BatchPlan {
    /// Scenes in generation order.
    pub fn scenes(&self) -> Vec<&dyn Composer> {
        let mut out: Vec<&dyn Composer> = vec![&self.hero_home, &self.hero_locations];
        out.extend(self.cards.iter().map(|c| c as &dyn Composer));
        out
    }

    /// Validate every scene and reject duplicate output names.
    pub fn validate(&self) -> ForgeResult<()> {
        let mut seen = BTreeSet::new();
        for scene in self.scenes() {
            scene.validate()?;
            if !seen.insert(scene.name()) {
                return Err(ForgeError::configuration(format!(
                    "scene name '{}' is used more than once",
                    scene.name()
                )));
            }
        }
        Ok(())
    }

    /// Parse a plan from JSON and validate it.
    pub fn from_json_str(s: &str) -> ForgeResult<Self> {
        let plan: Self = serde_json::from_str(s)
            .map_err(|e| ForgeError::configuration(format!("invalid plan json: {e}")))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Read and validate a JSON plan file.
    pub fn from_json_path(path: &Path) -> ForgeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ForgeError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ForgeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ForgeError::Other(e.into()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/plan.rs"]
mod tests;
