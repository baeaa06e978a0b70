use crate::domain::{Post, PostType};

pub const THUMBNAIL_WIDTH: u32 = 400;
pub const THUMBNAIL_HEIGHT: u32 = 300;

/// The view a post is shown in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Image,
    Video,
}

/// Returns `None` for post types no view shows.
pub fn category(post_type: PostType) -> Option<Category> {
    match post_type {
        PostType::Image => Some(Category::Image),
        PostType::Video | PostType::Unknown => Some(Category::Video),
        PostType::Unrecognized => None,
    }
}

/// Record handed to the gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub user: String,
    pub src: String,
    pub thumbnail: String,
    pub caption: String,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VideoBlock {
    pub src: String,
    pub controls: bool,
    pub caption: String,
}

pub fn image_projection(posts: &[Post]) -> Vec<GalleryImage> {
    posts
        .iter()
        .filter(|post| category(post.r#type) == Some(Category::Image))
        .map(|post| GalleryImage {
            user: post.user.clone(),
            src: post.url.clone(),
            thumbnail: post.url.clone(),
            caption: post.message.clone(),
            thumbnail_width: THUMBNAIL_WIDTH,
            thumbnail_height: THUMBNAIL_HEIGHT,
        })
        .collect()
}

pub fn video_projection(posts: &[Post]) -> Vec<VideoBlock> {
    posts
        .iter()
        .filter(|post| category(post.r#type) == Some(Category::Video))
        .map(|post| VideoBlock {
            src: post.url.clone(),
            controls: true,
            caption: format!("{}: {}", post.user, post.message),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn post(user: &str, url: &str, message: &str, r#type: PostType) -> Post {
        Post {
            user: user.to_string(),
            url: url.to_string(),
            message: message.to_string(),
            r#type,
        }
    }

    fn mixed_posts() -> Vec<Post> {
        vec![
            post("a", "u1", "m1", PostType::Video),
            post("b", "u2", "m2", PostType::Image),
            post("c", "u3", "m3", PostType::Unrecognized),
            post("d", "u4", "m4", PostType::Unknown),
            post("e", "u5", "m5", PostType::Image),
            post("f", "u6", "m6", PostType::Video),
        ]
    }

    #[rstest]
    #[case(PostType::Image, Some(Category::Image))]
    #[case(PostType::Video, Some(Category::Video))]
    #[case(PostType::Unknown, Some(Category::Video))]
    #[case(PostType::Unrecognized, None)]
    fn category_maps_every_post_type(#[case] post_type: PostType, #[case] expected: Option<Category>) {
        assert_eq!(category(post_type), expected);
    }

    #[test]
    fn projects_one_image_and_one_video() {
        let posts = vec![post("a", "u1", "m1", PostType::Image), post("b", "u2", "m2", PostType::Video)];

        assert_eq!(
            image_projection(&posts),
            vec![GalleryImage {
                user: "a".to_string(),
                src: "u1".to_string(),
                thumbnail: "u1".to_string(),
                caption: "m1".to_string(),
                thumbnail_width: 400,
                thumbnail_height: 300,
            }]
        );
        assert_eq!(
            video_projection(&posts),
            vec![VideoBlock {
                src: "u2".to_string(),
                controls: true,
                caption: "b: m2".to_string(),
            }]
        );
    }

    #[test]
    fn projections_keep_input_order() {
        let posts = mixed_posts();

        let images: Vec<_> = image_projection(&posts).into_iter().map(|image| image.src).collect();
        let videos: Vec<_> = video_projection(&posts).into_iter().map(|video| video.src).collect();

        assert_eq!(images, vec!["u2", "u5"]);
        assert_eq!(videos, vec!["u1", "u4", "u6"]);
    }

    #[test]
    fn projections_partition_the_shown_posts_and_drop_unrecognized_ones() {
        let posts = mixed_posts();

        let images = image_projection(&posts);
        let videos = video_projection(&posts);

        let shown = posts.iter().filter(|post| category(post.r#type).is_some()).count();
        assert_eq!(images.len() + videos.len(), shown);
        assert!(images.iter().all(|image| videos.iter().all(|video| video.src != image.src)));
        assert!(images.iter().all(|image| image.src != "u3"));
        assert!(videos.iter().all(|video| video.src != "u3"));
    }

    #[test]
    fn classifying_twice_yields_identical_projections() {
        let posts = mixed_posts();

        assert_eq!(image_projection(&posts), image_projection(&posts));
        assert_eq!(video_projection(&posts), video_projection(&posts));
    }

    #[test]
    fn empty_input_projects_to_nothing() {
        assert!(image_projection(&[]).is_empty());
        assert!(video_projection(&[]).is_empty());
    }
}
