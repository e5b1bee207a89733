mod loader;
mod train_route;

pub use loader::load_route_from;
pub use train_route::TrainRoute;
