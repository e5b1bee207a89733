use crate::domain::MapRegion;
use std::fmt::{Display, Formatter};

pub const USER_MARKER_TITLE: &str = "You";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PinColor {
    Default,
    Gold,
    Green,
}

impl Display for PinColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PinColor::Default => write!(f, "default"),
            PinColor::Gold => write!(f, "gold"),
            PinColor::Green => write!(f, "green"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Marker {
    pub region: MapRegion,
    pub title: Option<&'static str>,
    pub pin: PinColor,
}

impl Marker {
    pub fn user(region: MapRegion) -> Self {
        Marker {
            region,
            title: Some(USER_MARKER_TITLE),
            pin: PinColor::Default,
        }
    }

    pub fn gate(region: MapRegion) -> Self {
        Marker {
            region,
            title: None,
            pin: PinColor::Gold,
        }
    }

    pub fn train(region: MapRegion) -> Self {
        Marker {
            region,
            title: None,
            pin: PinColor::Green,
        }
    }
}
