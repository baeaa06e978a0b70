mod classify;
mod fetch;

pub use classify::{GalleryImage, VideoBlock, image_projection, video_projection};
pub use fetch::{FetchError, fetch_nearby_posts};
