use crate::domain::Post;

/// Everything the nearby view shows, owned by the view controller.
///
/// `posts` only ever holds the result of the last successful fetch, it is replaced wholesale and never merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub is_loading_geo_location: bool,
    pub is_loading_posts: bool,
    pub error: Option<String>,
    pub posts: Vec<Post>,
}
