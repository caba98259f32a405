//! Vision challenge: impairment filter chips and the accessible switch.
//!
//! The chip group is a reducer over toggle events. "Healthy" is checked
//! exactly when no filter is active.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

const CONTRAST_ALPHA: f32 = 0.2;
const INACCESSIBLE_BODY_ALPHA: f32 = 0.5;
const GENERIC_ICON_DESCRIPTION: &str = "Button";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VisionChip {
    Healthy,
    Contrast,
    Macular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChipToggle {
    pub chip: VisionChip,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
pub struct VisionFilters {
    pub contrast: bool,
    pub macular: bool,
}

/// What the host paints for a filter state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct VisionRender {
    pub content_alpha: f32,
    pub macular_mask_visible: bool,
    pub healthy_checked: bool,
}

impl VisionFilters {
    pub fn healthy(&self) -> bool {
        !self.contrast && !self.macular
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.contrast) + usize::from(self.macular)
    }

    #[must_use]
    pub fn reduce(self, toggle: ChipToggle) -> VisionFilters {
        match (toggle.chip, toggle.checked) {
            (VisionChip::Healthy, true) => VisionFilters::default(),
            // Healthy cannot be unchecked directly; it follows the filters.
            (VisionChip::Healthy, false) => self,
            (VisionChip::Contrast, checked) => VisionFilters {
                contrast: checked,
                ..self
            },
            (VisionChip::Macular, checked) => VisionFilters {
                macular: checked,
                ..self
            },
        }
    }

    pub fn render(&self) -> VisionRender {
        VisionRender {
            content_alpha: if self.contrast { CONTRAST_ALPHA } else { 1.0 },
            macular_mask_visible: self.macular,
            healthy_checked: self.healthy(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VisionIcon {
    Favorite,
    Share,
    Menu,
}

impl VisionIcon {
    pub const ALL: [VisionIcon; 3] = [VisionIcon::Favorite, VisionIcon::Share, VisionIcon::Menu];

    fn label(self) -> &'static str {
        match self {
            VisionIcon::Favorite => "Favorite",
            VisionIcon::Share => "Share",
            VisionIcon::Menu => "Menu",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct AccessibleContent {
    pub body_alpha: f32,
    pub icon_descriptions: Vec<(VisionIcon, String)>,
}

impl AccessibleContent {
    pub fn for_switch(accessible: bool) -> Self {
        let icon_descriptions = VisionIcon::ALL
            .into_iter()
            .map(|icon| {
                let label = if accessible {
                    icon.label()
                } else {
                    GENERIC_ICON_DESCRIPTION
                };
                (icon, label.to_string())
            })
            .collect();
        Self {
            body_alpha: if accessible {
                1.0
            } else {
                INACCESSIBLE_BODY_ALPHA
            },
            icon_descriptions,
        }
    }

    pub fn description(&self, icon: VisionIcon) -> &str {
        self.icon_descriptions
            .iter()
            .find(|(candidate, _)| *candidate == icon)
            .map(|(_, label)| label.as_str())
            .unwrap_or(GENERIC_ICON_DESCRIPTION)
    }
}
