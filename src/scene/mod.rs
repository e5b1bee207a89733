mod coordinator;
mod listener;
mod session;

pub use coordinator::{Collaborators, CoordinatorSettings, SceneCoordinator};
pub use listener::scene_listener;
pub use session::{SceneSnapshot, Session};
