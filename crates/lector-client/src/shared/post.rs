use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// GraphQL text of the `SharedPostInfo` fragment
macro_rules! shared_post_info_fragment {
    () => {
        r#"
fragment SharedPostInfo on Post {
  id
  title
  image
  readTime
  permalink
  commentsPermalink
  createdAt
  type
  numUpvotes
  numComments
  tags
  source {
    id
    name
    image
    handle
  }
}
"#
    };
}

pub(crate) use shared_post_info_fragment;

/// Summary of a post, as selected by the `SharedPostInfo` fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    pub title: Option<String>,
    pub image: Option<String>,
    pub read_time: Option<i64>,
    pub permalink: String,
    pub comments_permalink: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub num_upvotes: Option<i64>,
    pub num_comments: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub source: Option<SourceSummary>,
    /// The original post, when this one is a share
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_post: Option<Box<PostSummary>>,
}

impl PostSummary {
    /// Title to show for the post, falling back to the shared post's title
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or_else(|| {
            self.shared_post
                .as_deref()
                .and_then(|shared| shared.title.as_deref())
        })
    }
}

/// The source (publication or squad) a post belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
    pub handle: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;

    use super::PostSummary;

    #[test]
    fn shares_fall_back_to_the_original_title() {
        let post: PostSummary = serde_json::from_value(json!({
            "id": "share-1",
            "title": null,
            "permalink": "https://example.com/r/share-1",
            "commentsPermalink": "https://example.com/posts/share-1",
            "type": "share",
            "tags": null,
            "sharedPost": {
                "id": "p1",
                "title": "Ownership explained",
                "permalink": "https://example.com/r/p1",
                "commentsPermalink": "https://example.com/posts/p1"
            }
        }))
        .unwrap();

        assert_that!(post.display_title()).is_equal_to(Some("Ownership explained"));
        assert_that!(post.kind.as_deref()).is_equal_to(Some("share"));
    }
}
