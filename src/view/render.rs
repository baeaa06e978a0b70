use crate::domain::ViewState;
use crate::posts::{GalleryImage, VideoBlock, image_projection, video_projection};
use std::fmt::{Display, Formatter, Result as FmtResult};
use tokio::sync::watch::Receiver;
use tracing::instrument;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Images,
    Videos,
    Map,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Images, Tab::Videos, Tab::Map];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Images => "Image Posts",
            Tab::Videos => "Video Posts",
            Tab::Map => "Map",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TabContent {
    Error(String),
    LoadingGeoLocation,
    LoadingPosts,
    Gallery(Vec<GalleryImage>),
    Videos(Vec<VideoBlock>),
    NoPosts,
    MapPlaceholder,
}

/// Derives what a tab shows, the first matching rule wins: error, locating, loading, posts, nothing found.
pub fn render_tab(state: &ViewState, tab: Tab) -> TabContent {
    if tab == Tab::Map {
        return TabContent::MapPlaceholder;
    }

    if let Some(error) = &state.error {
        TabContent::Error(error.clone())
    } else if state.is_loading_geo_location {
        TabContent::LoadingGeoLocation
    } else if state.is_loading_posts {
        TabContent::LoadingPosts
    } else if !state.posts.is_empty() {
        match tab {
            Tab::Images => TabContent::Gallery(image_projection(&state.posts)),
            _ => TabContent::Videos(video_projection(&state.posts)),
        }
    } else {
        TabContent::NoPosts
    }
}

impl Display for TabContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TabContent::Error(error) => write!(f, "  {}", error),
            TabContent::LoadingGeoLocation => write!(f, "  ⏳ Loading geo location..."),
            TabContent::LoadingPosts => write!(f, "  ⏳ Loading posts..."),
            TabContent::Gallery(images) => {
                for image in images {
                    writeln!(
                        f,
                        "  🖼  {} [{}x{}] {} ({})",
                        image.thumbnail, image.thumbnail_width, image.thumbnail_height, image.caption, image.user
                    )?;
                }
                Ok(())
            }
            TabContent::Videos(videos) => {
                for video in videos {
                    let controls = if video.controls { " ⏯" } else { "" };
                    writeln!(f, "  🎬 {}{}", video.src, controls)?;
                    writeln!(f, "     {}", video.caption)?;
                }
                Ok(())
            }
            TabContent::NoPosts => write!(f, "  No nearby posts"),
            TabContent::MapPlaceholder => write!(f, "  Map view is not available yet"),
        }
    }
}

pub fn render_view(state: &ViewState) -> String {
    Tab::ALL
        .iter()
        .map(|tab| format!("== {} ==\n{}", tab.title(), render_tab(state, *tab)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Re-renders every tab whenever the view state changes.
#[instrument(skip_all)]
pub async fn render_listener(mut rx: Receiver<ViewState>) {
    println!("{}", render_view(&rx.borrow_and_update()));
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        println!("{}", render_view(&state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Post, PostType};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn posts() -> Vec<Post> {
        vec![
            Post {
                user: "a".to_string(),
                url: "u1".to_string(),
                message: "m1".to_string(),
                r#type: PostType::Image,
            },
            Post {
                user: "b".to_string(),
                url: "u2".to_string(),
                message: "m2".to_string(),
                r#type: PostType::Video,
            },
        ]
    }

    fn state(error: Option<&str>, is_loading_geo_location: bool, is_loading_posts: bool, posts: Vec<Post>) -> ViewState {
        ViewState {
            is_loading_geo_location,
            is_loading_posts,
            error: error.map(str::to_string),
            posts,
        }
    }

    #[rstest]
    #[case(state(Some("boom"), true, true, posts()), TabContent::Error("boom".to_string()))]
    #[case(state(None, true, true, posts()), TabContent::LoadingGeoLocation)]
    #[case(state(None, false, true, posts()), TabContent::LoadingPosts)]
    #[case(state(None, false, false, vec![]), TabContent::NoPosts)]
    fn applies_the_display_precedence(#[case] state: ViewState, #[case] expected: TabContent) {
        assert_eq!(render_tab(&state, Tab::Images), expected);
        assert_eq!(render_tab(&state, Tab::Videos), expected);
    }

    #[test]
    fn each_tab_shows_its_own_projection() {
        let state = state(None, false, false, posts());

        let TabContent::Gallery(images) = render_tab(&state, Tab::Images) else {
            panic!("Expected gallery content");
        };
        let TabContent::Videos(videos) = render_tab(&state, Tab::Videos) else {
            panic!("Expected video content");
        };

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].src, "u1");
        assert_eq!(images[0].caption, "m1");
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].src, "u2");
        assert_eq!(videos[0].caption, "b: m2");
    }

    #[test]
    fn map_tab_is_always_a_placeholder() {
        let state = state(Some("boom"), false, false, posts());

        assert_eq!(render_tab(&state, Tab::Map), TabContent::MapPlaceholder);
    }

    #[test]
    fn a_tab_with_only_other_post_types_renders_empty() {
        let state = state(None, false, false, vec![posts().remove(1)]);

        assert_eq!(render_tab(&state, Tab::Images), TabContent::Gallery(vec![]));
    }

    #[test]
    fn renders_all_tabs_as_text() {
        let state = state(None, false, false, posts());

        assert_eq!(
            render_view(&state),
            "== Image Posts ==\n  🖼  u1 [400x300] m1 (a)\n\n== Video Posts ==\n  🎬 u2 ⏯\n     b: m2\n\n== Map ==\n  Map view is not available yet"
        );
    }
}
