use serde::{Deserialize, Serialize};

use crate::data::cutin::{CutinDef, DayCutin, NightCutin};

/// How one attack is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AttackStyle {
    Normal,
    DayCutin { cutin: DayCutin, def: CutinDef },
    NightCutin { cutin: NightCutin, def: CutinDef },
    Asw,
    Torpedo,
}

impl AttackStyle {
    pub fn def(&self) -> Option<&CutinDef> {
        match self {
            Self::DayCutin { def, .. } | Self::NightCutin { def, .. } => Some(def),
            Self::Normal | Self::Asw | Self::Torpedo => None,
        }
    }

    pub fn is_special(&self) -> bool {
        self.def().is_some()
    }

    pub fn power_mod(&self) -> f64 {
        self.def().map(|def| def.power_mod).unwrap_or(1.0)
    }

    pub fn power_adder(&self) -> f64 {
        self.def().map(|def| def.power_adder).unwrap_or(0.0)
    }

    pub fn accuracy_mod(&self) -> f64 {
        self.def().map(|def| def.accuracy_mod).unwrap_or(1.0)
    }

    pub fn accuracy_adder(&self) -> f64 {
        self.def().map(|def| def.accuracy_adder).unwrap_or(0.0)
    }

    pub fn hits(&self) -> u8 {
        self.def().map(|def| def.hits.max(1)).unwrap_or(1)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Normal => "Normal".to_string(),
            Self::DayCutin { cutin, .. } => format!("Day:{cutin:?}"),
            Self::NightCutin { cutin, .. } => format!("Night:{cutin:?}"),
            Self::Asw => "Asw".to_string(),
            Self::Torpedo => "Torpedo".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_styles_are_neutral() {
        assert_eq!(AttackStyle::Normal.power_mod(), 1.0);
        assert_eq!(AttackStyle::Torpedo.hits(), 1);
        assert!(!AttackStyle::Asw.is_special());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let style = AttackStyle::NightCutin {
            cutin: NightCutin::TorpTorp,
            def: CutinDef::new(1.5, 1.65, 2, Some(122)),
        };
        let json = serde_json::to_value(style).unwrap();
        assert_eq!(json["kind"], "NightCutin");
        assert_eq!(json["cutin"], "TorpTorp");
        assert_eq!(style.hits(), 2);
        assert_eq!(style.label(), "Night:TorpTorp");
    }
}
