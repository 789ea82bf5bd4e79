use super::*;

/// A validated vote response.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Tally {
  pub totalvotes: i64,
  pub entryid: Option<i64>,
  pub userid: Option<i64>,
}

impl Tally {
  pub(crate) fn parse(request: &VoteRequest, body: &[u8]) -> Result<Self> {
    serde_json::from_slice(body).context(error::Deserialize {
      request: request.to_string(),
    })
  }
}

impl Display for Tally {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} total votes", self.totalvotes)?;

    match (self.entryid, self.userid) {
      (Some(entry), Some(user)) => write!(f, " (entry {entry}, user {user})"),
      (Some(entry), None) => write!(f, " (entry {entry})"),
      (None, Some(user)) => write!(f, " (user {user})"),
      (None, None) => Ok(()),
    }
  }
}
