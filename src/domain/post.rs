use serde::{Deserialize, Deserializer};

/// Missing or `null` fields decode to their default, a single incomplete post must not fail the whole search result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub r#type: PostType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Image,
    Video,
    Unknown,
    /// Any type the server sends that this client does not know about, or none at all
    #[default]
    #[serde(other)]
    Unrecognized,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
