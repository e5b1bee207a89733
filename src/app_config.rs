use crate::domain::MapRegion;
use crate::location::{LocationOptions, Platform};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    scene: Scene,
    refresh: Refresh,
    location: LocationOptions,
    permission: Permission,
    route: Route,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("RAILGATE").separator("__"))
            .build()?;

        AppConfig::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.refresh.validate()?;

        Ok(app_config)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn refresh(&self) -> &Refresh {
        &self.refresh
    }

    pub fn location(&self) -> &LocationOptions {
        &self.location
    }

    pub fn permission(&self) -> &Permission {
        &self.permission
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

#[derive(Debug, Deserialize)]
pub struct Scene {
    user: MapRegion,
    train: MapRegion,
    train_fallback: MapRegion,
    gates: Vec<MapRegion>,
}

impl Scene {
    pub fn user(&self) -> MapRegion {
        self.user
    }

    pub fn train(&self) -> MapRegion {
        self.train
    }

    pub fn train_fallback(&self) -> MapRegion {
        self.train_fallback
    }

    pub fn gates(&self) -> &[MapRegion] {
        &self.gates
    }
}

#[derive(Debug, Deserialize)]
pub struct Refresh {
    #[serde(with = "humantime_serde")]
    user_interval: Duration,
    #[serde(with = "humantime_serde")]
    train_interval: Duration,
    #[serde(with = "humantime_serde")]
    recenter_duration: Duration,
}

impl Refresh {
    /// Refresh loops run on tokio intervals, which require a non-zero period.
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, interval) in [("refresh.user_interval", self.user_interval), ("refresh.train_interval", self.train_interval)] {
            if interval.is_zero() {
                return Err(ConfigError::Message(format!("invalid {}: must be greater than zero", key)));
            }
        }

        Ok(())
    }

    pub fn user_interval(&self) -> Duration {
        self.user_interval
    }

    pub fn train_interval(&self) -> Duration {
        self.train_interval
    }

    pub fn recenter_duration(&self) -> Duration {
        self.recenter_duration
    }
}

#[derive(Debug, Deserialize)]
pub struct Permission {
    platform: Platform,
    granted: bool,
}

impl Permission {
    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn granted(&self) -> bool {
        self.granted
    }
}

#[derive(Debug, Deserialize)]
pub struct Route {
    path: String,
}

impl Route {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        use crate::domain::GeoPoint;

        AppConfigBuilder {
            config: AppConfig {
                scene: Scene {
                    user: MapRegion::around(GeoPoint::new(6.8649, 79.8997)),
                    train: MapRegion::around(GeoPoint::new(6.8857354543513045, 79.88082094080386)),
                    train_fallback: MapRegion::around(GeoPoint::new(6.8817813289909004, 79.88294412296925)),
                    gates: vec![MapRegion::around(GeoPoint::new(6.88250166633171, 79.88297447562218))],
                },
                refresh: Refresh {
                    user_interval: Duration::from_secs(3),
                    train_interval: Duration::from_secs(3),
                    recenter_duration: Duration::from_secs(3),
                },
                location: LocationOptions::default(),
                permission: Permission {
                    platform: Platform::Android,
                    granted: true,
                },
                route: Route {
                    path: "resources/train_route.json".to_string(),
                },
            },
        }
    }

    pub fn gates(mut self, gates: Vec<MapRegion>) -> Self {
        self.config.scene.gates = gates;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use config::FileFormat;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const CONFIG: &str = r#"
        [scene]
        user = { latitude = 6.8649, longitude = 79.8997 }
        train = { latitude = 6.8857354543513045, longitude = 79.88082094080386 }
        train_fallback = { latitude = 6.8817813289909004, longitude = 79.88294412296925 }
        gates = [{ latitude = 6.88250166633171, longitude = 79.88297447562218, latitude_delta = 0.001 }]

        [refresh]
        user_interval = "3s"
        train_interval = "2s 500ms"
        recenter_duration = "3s"

        [location]
        high_accuracy = true
        timeout = "15s"
        maximum_age = "10s"

        [permission]
        platform = "android"
        granted = true

        [route]
        path = "resources/train_route.json"
    "#;

    fn parse(content: &str) -> Result<AppConfig, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::from_str(content, FileFormat::Toml))
            .build()?;

        AppConfig::from_config(config)
    }

    #[test]
    fn deserialize_config() -> Result<(), ConfigError> {
        let config = parse(CONFIG)?;

        assert_eq!(config.refresh().train_interval(), Duration::from_millis(2_500));
        assert_eq!(config.location(), &LocationOptions::default());
        assert_eq!(config.permission().platform(), Platform::Android);
        assert_eq!(config.scene().gates()[0].latitude_delta, 0.001);
        assert_eq!(config.scene().gates()[0].longitude_delta, 0.0005);
        assert_eq!(config.scene().user(), MapRegion::around(GeoPoint::new(6.8649, 79.8997)));
        Ok(())
    }

    #[test]
    fn deserialize_rejects_an_invalid_coordinate() {
        let content = CONFIG.replace("user = { latitude = 6.8649", "user = { latitude = 96.8649");

        assert!(parse(&content).is_err());
    }

    #[rstest]
    #[case::user_interval(r#"user_interval = "3s""#, r#"user_interval = "0s""#, "refresh.user_interval")]
    #[case::train_interval(r#"train_interval = "2s 500ms""#, r#"train_interval = "0ms""#, "refresh.train_interval")]
    fn from_config_rejects_a_zero_refresh_interval(#[case] from: &str, #[case] to: &str, #[case] key: &str) {
        let content = CONFIG.replace(from, to);

        match parse(&content) {
            Err(ConfigError::Message(message)) => assert_eq!(message, format!("invalid {}: must be greater than zero", key)),
            other => panic!("expected a zero interval to be rejected, found {:?}", other),
        }
    }

    #[test]
    fn the_bundled_config_is_valid() -> Result<(), ConfigError> {
        let config = parse(include_str!("../config.toml"))?;

        assert_eq!(config.refresh().user_interval(), Duration::from_secs(3));
        assert_eq!(config.scene().gates().len(), 1);
        Ok(())
    }
}
