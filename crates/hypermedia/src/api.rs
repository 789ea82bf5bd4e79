use super::*;

/// Issues GET requests against the origin of the current page.
#[derive(Clone, Debug)]
pub struct Api {
  base: Url,
}

impl Api {
  pub fn new() -> Result<Self, Error> {
    let href = window()?
      .location()
      .href()
      .map_err(|source| error::Location { source }.build())?;
    Self::from_href(&href)
  }

  pub fn from_href(href: &str) -> Result<Self, Error> {
    let mut base = Url::parse(href).context(error::Parse { input: href })?;
    base.set_fragment(None);
    base.set_query(None);
    Ok(Self { base })
  }

  pub fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, Error> {
    let mut url = self.base.join(path).context(error::Parse { input: path })?;

    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
  }

  pub async fn fetch(
    &self,
    path: &str,
    query: &[(&str, &str)],
  ) -> Result<(StatusCode, Vec<u8>), Error> {
    let url = self.url(path, query)?;

    log::debug!("GET {url}");

    let response = reqwest::Client::new()
      .get(url.clone())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    let body = response
      .bytes()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    Ok((status, body.to_vec()))
  }
}
