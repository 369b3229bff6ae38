use super::*;

#[derive(Debug, Error)]
pub(crate) enum FeedError {
  #[error("malformed response from {url}: {source}")]
  Decode { source: reqwest::Error, url: String },
  #[error("request to {url} failed: {source}")]
  Network { source: reqwest::Error, url: String },
}

impl FeedError {
  pub(crate) fn from_request(source: reqwest::Error, url: String) -> Self {
    if source.is_decode() {
      Self::Decode { source, url }
    } else {
      Self::Network { source, url }
    }
  }

  pub(crate) fn is_decode(&self) -> bool {
    matches!(self, Self::Decode { .. })
  }

  pub(crate) fn is_timeout(&self) -> bool {
    matches!(self, Self::Network { source, .. } if source.is_timeout())
  }
}
