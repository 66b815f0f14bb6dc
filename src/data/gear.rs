//! Gear templates: category/icon classification and attribute tags.
//! `types` mirrors the game's 5-tuple; index 2 is the category, index 3 the icon.

use serde::{Deserialize, Serialize};

pub const HIGH_ANGLE_MOUNT_ICON: u8 = 16;
pub const NIGHT_FIGHTER_ICON: u8 = 45;
pub const NIGHT_ATTACKER_ICON: u8 = 46;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GearCategory {
    SmallMainGun,
    MediumMainGun,
    LargeMainGun,
    SecondaryGun,
    Torpedo,
    CbFighter,
    CbDiveBomber,
    CbTorpedoBomber,
    CbRecon,
    ReconSeaplane,
    SeaplaneBomber,
    SmallRadar,
    LargeRadar,
    Sonar,
    DepthCharge,
    EngineImprovement,
    AntiAirShell,
    ApShell,
    AntiAirGun,
    MidgetSubmarine,
    LandingCraft,
    Autogyro,
    AntiSubPatrolAircraft,
    Searchlight,
    TransportContainer,
    SubmarineTorpedo,
    StarShell,
    CommandFacility,
    AntiAirFireDirector,
    SurfaceShipPersonnel,
    LargeSonar,
    LargeFlyingBoat,
    LargeSearchlight,
    SeaplaneFighter,
    LbAttacker,
    LbFighter,
    LbRecon,
    JetFighterBomber,
    Other(u8),
}

impl GearCategory {
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => Self::SmallMainGun,
            2 => Self::MediumMainGun,
            3 => Self::LargeMainGun,
            4 => Self::SecondaryGun,
            5 => Self::Torpedo,
            6 => Self::CbFighter,
            7 => Self::CbDiveBomber,
            8 => Self::CbTorpedoBomber,
            9 | 94 => Self::CbRecon,
            10 => Self::ReconSeaplane,
            11 => Self::SeaplaneBomber,
            12 => Self::SmallRadar,
            13 | 93 => Self::LargeRadar,
            14 => Self::Sonar,
            15 => Self::DepthCharge,
            17 => Self::EngineImprovement,
            18 => Self::AntiAirShell,
            19 => Self::ApShell,
            21 => Self::AntiAirGun,
            22 => Self::MidgetSubmarine,
            24 => Self::LandingCraft,
            25 => Self::Autogyro,
            26 => Self::AntiSubPatrolAircraft,
            29 => Self::Searchlight,
            30 => Self::TransportContainer,
            32 => Self::SubmarineTorpedo,
            33 => Self::StarShell,
            34 => Self::CommandFacility,
            36 => Self::AntiAirFireDirector,
            39 => Self::SurfaceShipPersonnel,
            40 => Self::LargeSonar,
            41 => Self::LargeFlyingBoat,
            42 => Self::LargeSearchlight,
            45 => Self::SeaplaneFighter,
            47 => Self::LbAttacker,
            48 => Self::LbFighter,
            49 => Self::LbRecon,
            57 => Self::JetFighterBomber,
            other => Self::Other(other),
        }
    }

    pub fn is_main_gun(self) -> bool {
        matches!(
            self,
            Self::SmallMainGun | Self::MediumMainGun | Self::LargeMainGun
        )
    }

    pub fn is_radar(self) -> bool {
        matches!(self, Self::SmallRadar | Self::LargeRadar)
    }

    pub fn is_sonar(self) -> bool {
        matches!(self, Self::Sonar | Self::LargeSonar)
    }

    pub fn is_searchlight(self) -> bool {
        matches!(self, Self::Searchlight | Self::LargeSearchlight)
    }

    pub fn is_cb_aircraft(self) -> bool {
        matches!(
            self,
            Self::CbFighter
                | Self::CbDiveBomber
                | Self::CbTorpedoBomber
                | Self::CbRecon
                | Self::JetFighterBomber
        )
    }

    pub fn is_land_based(self) -> bool {
        matches!(self, Self::LbAttacker | Self::LbFighter | Self::LbRecon)
    }

    pub fn is_aircraft(self) -> bool {
        self.is_cb_aircraft()
            || self.is_land_based()
            || matches!(
                self,
                Self::ReconSeaplane
                    | Self::SeaplaneBomber
                    | Self::SeaplaneFighter
                    | Self::Autogyro
                    | Self::AntiSubPatrolAircraft
                    | Self::LargeFlyingBoat
            )
    }

    pub fn is_observation_seaplane(self) -> bool {
        matches!(self, Self::ReconSeaplane | Self::SeaplaneBomber)
    }

    /// Aircraft that participate in air combat and therefore count towards fighter power.
    pub fn is_fighter_power_aircraft(self) -> bool {
        matches!(
            self,
            Self::CbFighter
                | Self::CbDiveBomber
                | Self::CbTorpedoBomber
                | Self::SeaplaneBomber
                | Self::SeaplaneFighter
                | Self::JetFighterBomber
                | Self::LbAttacker
                | Self::LbFighter
        )
    }

    pub fn is_fighter(self) -> bool {
        matches!(self, Self::CbFighter | Self::SeaplaneFighter | Self::LbFighter)
    }

    pub fn is_recon(self) -> bool {
        matches!(
            self,
            Self::CbRecon | Self::ReconSeaplane | Self::LargeFlyingBoat | Self::LbRecon
        )
    }

    /// Carrier-based bombers that make a carrier able to shell.
    pub fn is_attack_aircraft(self) -> bool {
        matches!(
            self,
            Self::CbDiveBomber | Self::CbTorpedoBomber | Self::JetFighterBomber
        )
    }
}

/// Gear attributes. Most are derived from category/icon/stats; the ones that
/// only the data can know (e.g. Zuiun, night recon) are tagged in `MasterGear::attrs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GearAttr {
    MainGun,
    HighAngleMount,
    HighAngleMountWithDirector,
    ConcentratedAntiAirGun,
    Radar,
    SurfaceRadar,
    AirRadar,
    ObservationSeaplane,
    NightFighter,
    NightAttacker,
    SemiNightPlane,
    NightRecon,
    Zuiun,
    AirSeaBomber,
    Searchlight,
    StarShell,
    SkilledLookouts,
    Drum,
    LateModelTorpedo,
    SubmarineRadar,
    CruiserSingleGun,
    CruiserTwinGun,
    ApShell,
    AntiAirShell,
    LandingCraft,
    AntiGroundRocket,
    DepthChargeProjector,
    AdditionalDepthCharge,
    Jet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterGear {
    pub gear_id: u16,
    pub name: String,
    pub types: [u8; 5],
    pub firepower: i32,
    pub torpedo: i32,
    pub anti_air: i32,
    pub bombing: i32,
    pub asw: i32,
    pub los: i32,
    pub accuracy: i32,
    pub evasion: i32,
    pub armor: i32,
    pub interception: i32,
    pub anti_bomber: i32,
    pub range: u8,
    pub radius: i32,
    pub cost: i32,
    /// Proportional shootdown resistance for land-based aircraft (1.0 = none).
    pub anti_air_resistance: Option<f64>,
    pub attrs: Vec<GearAttr>,
}

impl MasterGear {
    pub fn category(&self) -> GearCategory {
        GearCategory::from_id(self.types[2])
    }

    pub fn icon(&self) -> u8 {
        self.types[3]
    }

    pub fn has_attr(&self, attr: GearAttr) -> bool {
        self.attrs.contains(&attr) || self.derives_attr(attr)
    }

    fn derives_attr(&self, attr: GearAttr) -> bool {
        let category = self.category();
        match attr {
            GearAttr::MainGun => category.is_main_gun(),
            GearAttr::HighAngleMount => self.icon() == HIGH_ANGLE_MOUNT_ICON,
            GearAttr::HighAngleMountWithDirector => {
                self.icon() == HIGH_ANGLE_MOUNT_ICON && self.anti_air >= 8
            }
            GearAttr::ConcentratedAntiAirGun => {
                category == GearCategory::AntiAirGun && self.anti_air >= 9
            }
            GearAttr::Radar => category.is_radar(),
            GearAttr::SurfaceRadar => category.is_radar() && self.los >= 5,
            GearAttr::AirRadar => category.is_radar() && self.anti_air >= 2,
            GearAttr::ObservationSeaplane => category.is_observation_seaplane(),
            GearAttr::NightFighter => self.icon() == NIGHT_FIGHTER_ICON,
            GearAttr::NightAttacker => self.icon() == NIGHT_ATTACKER_ICON,
            GearAttr::Searchlight => category.is_searchlight(),
            GearAttr::StarShell => category == GearCategory::StarShell,
            GearAttr::SkilledLookouts => category == GearCategory::SurfaceShipPersonnel,
            GearAttr::Drum => category == GearCategory::TransportContainer,
            GearAttr::ApShell => category == GearCategory::ApShell,
            GearAttr::AntiAirShell => category == GearCategory::AntiAirShell,
            GearAttr::LandingCraft => category == GearCategory::LandingCraft,
            GearAttr::Jet => category == GearCategory::JetFighterBomber,
            GearAttr::SemiNightPlane
            | GearAttr::NightRecon
            | GearAttr::Zuiun
            | GearAttr::AirSeaBomber
            | GearAttr::LateModelTorpedo
            | GearAttr::SubmarineRadar
            | GearAttr::CruiserSingleGun
            | GearAttr::CruiserTwinGun
            | GearAttr::AntiGroundRocket
            | GearAttr::DepthChargeProjector
            | GearAttr::AdditionalDepthCharge => false,
        }
    }

    pub fn is_night_plane(&self) -> bool {
        self.has_attr(GearAttr::NightFighter) || self.has_attr(GearAttr::NightAttacker)
    }
}
