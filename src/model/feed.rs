//! Feed payloads published on a user's behalf.
//!
//! Each payload kind knows which remote method publishes it, so publishing is a
//! match on [`FeedItem`] rather than a lookup by type name.

use crate::session::{join_list, Method, Params};
use serde_json::Value;

/// Maximum number of images a feed payload may carry.
pub const MAX_IMAGES: usize = 4;

/// An image attached to a feed payload, optionally linking somewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedImage {
    pub src: String,
    pub link: Option<String>,
}

impl FeedImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// A story published to the user's own feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
    pub title: String,
    pub body: Option<String>,
    pub images: Vec<FeedImage>,
}

/// An action the user took, published to their friends' feeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    pub title: String,
    pub body: Option<String>,
    pub images: Vec<FeedImage>,
}

/// A templated action: the remote side renders the template with the data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplatizedAction {
    pub title_template: String,
    pub title_data: Option<Value>,
    pub body_template: Option<String>,
    pub body_data: Option<Value>,
    pub body_general: Option<String>,
    pub page_actor_id: Option<u64>,
    pub target_ids: Vec<u64>,
    pub images: Vec<FeedImage>,
}

impl Story {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl Action {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl TemplatizedAction {
    pub fn new(title_template: impl Into<String>) -> Self {
        Self {
            title_template: title_template.into(),
            ..Default::default()
        }
    }
}

/// A publishable feed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedItem {
    Story(Story),
    Action(Action),
    TemplatizedAction(TemplatizedAction),
}

impl FeedItem {
    /// The remote method that publishes this kind of payload.
    pub fn method(&self) -> Method {
        match self {
            FeedItem::Story(_) => Method::FeedPublishStoryToUser,
            FeedItem::Action(_) => Method::FeedPublishActionOfUser,
            FeedItem::TemplatizedAction(_) => Method::FeedPublishTemplatizedAction,
        }
    }

    /// Flattens the payload into request params. Images past [`MAX_IMAGES`] are dropped.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        let images = match self {
            FeedItem::Story(Story { title, body, images })
            | FeedItem::Action(Action { title, body, images }) => {
                params.insert("title".into(), title.as_str().into());
                if let Some(body) = body {
                    params.insert("body".into(), body.as_str().into());
                }
                images
            }
            FeedItem::TemplatizedAction(action) => {
                params.insert("title_template".into(), action.title_template.as_str().into());
                if let Some(data) = &action.title_data {
                    params.insert("title_data".into(), data.to_string().into());
                }
                if let Some(template) = &action.body_template {
                    params.insert("body_template".into(), template.as_str().into());
                }
                if let Some(data) = &action.body_data {
                    params.insert("body_data".into(), data.to_string().into());
                }
                if let Some(general) = &action.body_general {
                    params.insert("body_general".into(), general.as_str().into());
                }
                if let Some(actor) = action.page_actor_id {
                    params.insert("page_actor_id".into(), actor.into());
                }
                if !action.target_ids.is_empty() {
                    params.insert("target_ids".into(), join_list(&action.target_ids).into());
                }
                &action.images
            }
        };

        for (n, image) in images.iter().take(MAX_IMAGES).enumerate() {
            let key = format!("image_{}", n + 1);
            if let Some(link) = &image.link {
                params.insert(format!("{key}_link"), link.as_str().into());
            }
            params.insert(key, image.src.as_str().into());
        }
        params
    }
}

impl From<Story> for FeedItem {
    fn from(story: Story) -> Self {
        FeedItem::Story(story)
    }
}

impl From<Action> for FeedItem {
    fn from(action: Action) -> Self {
        FeedItem::Action(action)
    }
}

impl From<TemplatizedAction> for FeedItem {
    fn from(action: TemplatizedAction) -> Self {
        FeedItem::TemplatizedAction(action)
    }
}
