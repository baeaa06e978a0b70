mod controller;
mod render;

pub use controller::NearbyView;
pub use render::render_listener;
