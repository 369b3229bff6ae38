use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  pub(crate) const API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  pub(crate) const FAN_OUT: usize = 50;

  async fn get_json<T: DeserializeOwned>(
    &self,
    url: String,
  ) -> Result<T, FeedError> {
    self
      .request(&url)
      .await
      .map_err(|source| FeedError::from_request(source, url))
  }

  pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .build()
      .context("could not build HTTP client")?;

    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client,
    })
  }

  async fn request<T: DeserializeOwned>(&self, url: &str) -> reqwest::Result<T> {
    self
      .client
      .get(url)
      .send()
      .await?
      .error_for_status()?
      .json::<T>()
      .await
  }
}

impl Feed for Client {
  type Error = FeedError;

  async fn fetch_story(&self, id: StoryId) -> Result<Story, FeedError> {
    self
      .get_json(format!("{}/item/{id}.json", self.base_url))
      .await
  }

  async fn fetch_top_story_ids(&self) -> Result<Vec<StoryId>, FeedError> {
    let mut ids = self
      .get_json::<Vec<StoryId>>(format!("{}/topstories.json", self.base_url))
      .await?;

    ids.truncate(Self::FAN_OUT);

    Ok(ids)
  }
}
