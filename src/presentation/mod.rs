mod alert_surface;
mod map;

pub use alert_surface::{AlertSurface, LogAlertSurface};
pub use map::{LogMapPresenter, MapPresenter};
