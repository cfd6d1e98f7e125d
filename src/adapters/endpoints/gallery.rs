use crate::adapters::http::ApiClient;
use crate::domain::model::{GalleryCategory, GalleryImage};
use crate::domain::ports::GalleryQuery;
use crate::utils::error::Result;

const PATH: &str = "gallery/";

#[derive(Clone)]
pub struct GalleryApi {
    client: ApiClient,
}

impl GalleryApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /gallery/ with optional `category` and `is_featured` filters.
    pub async fn list(&self, query: &GalleryQuery) -> Result<Vec<GalleryImage>> {
        self.client.list(PATH, query).await
    }

    pub async fn all(&self) -> Result<Vec<GalleryImage>> {
        self.list(&GalleryQuery::default()).await
    }

    pub async fn featured(&self) -> Result<Vec<GalleryImage>> {
        self.list(&GalleryQuery {
            is_featured: Some(true),
            ..Default::default()
        })
        .await
    }

    pub async fn by_category(&self, category: GalleryCategory) -> Result<Vec<GalleryImage>> {
        self.list(&GalleryQuery {
            category: Some(category),
            ..Default::default()
        })
        .await
    }
}
