use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct VoteRequest {
  pub(crate) action: Action,
  pub(crate) path: String,
  pub(crate) token: String,
  pub(crate) token_param: String,
}

impl VoteRequest {
  pub(crate) fn new(endpoints: &Endpoints, action: Action, token: String) -> Self {
    Self {
      action,
      path: action.path(endpoints).into(),
      token,
      token_param: endpoints.token_param.clone(),
    }
  }

  pub(crate) fn query(&self) -> [(&str, &str); 1] {
    [(self.token_param.as_str(), self.token.as_str())]
  }
}

impl Display for VoteRequest {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "GET {}?{}={}", self.path, self.token_param, self.token)
  }
}
