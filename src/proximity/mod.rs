mod alarm;

pub use alarm::ProximityAlarm;
