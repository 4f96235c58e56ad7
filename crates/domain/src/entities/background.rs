use serde::{Deserialize, Serialize};

use super::grants::AutomaticGrants;
use crate::ids::BackgroundId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundData {
    pub id: BackgroundId,
    pub name: String,
    pub grants: AutomaticGrants,
    /// Narrative feature, e.g. "Shelter of the Faithful"
    pub feature: Option<String>,
}

impl BackgroundData {
    pub fn new(id: impl Into<BackgroundId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grants: AutomaticGrants::default(),
            feature: None,
        }
    }

    pub fn with_grants(mut self, grants: AutomaticGrants) -> Self {
        self.grants = grants;
        self
    }

    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }
}
