mod permission;
mod source;
mod stdin_feed;
mod watch_source;

pub use permission::{ConfiguredPermissionGate, Permission, PermissionGate, Platform};
pub use source::{CoordinateSource, LocationError, LocationOptions};
pub use stdin_feed::feed_fixes;
pub use watch_source::{FixSender, WatchCoordinateSource};
