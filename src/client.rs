use super::*;

pub trait Client {
  type Error: std::error::Error + 'static;

  async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Reply, Self::Error>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
  pub status: u16,
  pub body: Vec<u8>,
}

impl Reply {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn success_range() {
    #[track_caller]
    fn case(status: u16, success: bool) {
      assert_eq!(
        Reply {
          status,
          body: Vec::new(),
        }
        .is_success(),
        success,
      );
    }

    case(199, false);
    case(200, true);
    case(204, true);
    case(299, true);
    case(300, false);
    case(304, false);
    case(404, false);
    case(503, false);
  }
}
