mod coordinate;
pub mod events;
mod post;
mod view_state;

pub use coordinate::{Coordinate, FALLBACK_COORDINATE};
pub use post::{Post, PostType};
pub use view_state::ViewState;
