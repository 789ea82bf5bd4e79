use super::*;

/// Page markers, endpoints and runtime policy for a [`VoteBinder`].
///
/// Every field has a default matching the stock newsboard markup, so an empty
/// JSON object is a complete configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub endpoints: Endpoints,
  pub in_flight: InFlight,
  pub log_level: log::Level,
  pub markers: Markers,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      endpoints: Endpoints::default(),
      in_flight: InFlight::default(),
      log_level: log::Level::Info,
      markers: Markers::default(),
    }
  }
}

impl Config {
  pub fn from_json(json: &str) -> Result<Self> {
    let config = serde_json::from_str::<Self>(json).context(error::Config)?;
    config.validate()?;
    Ok(config)
  }

  /// Parses page-supplied configuration, or returns the defaults when the
  /// page supplies none.
  pub fn load(json: Option<&str>) -> Result<Self> {
    match json {
      Some(json) => Self::from_json(json),
      None => Ok(Self::default()),
    }
  }

  pub fn validate(&self) -> Result {
    static CLASS: Lazy<Regex> = lazy_regex!("^-?[_a-zA-Z][_a-zA-Z0-9-]*$");
    static ATTRIBUTE: Lazy<Regex> = lazy_regex!("^[a-zA-Z_][-a-zA-Z0-9_.]*$");

    let markers = &self.markers;

    for (name, value) in [
      ("button", &markers.button),
      ("voted", &markers.voted),
      ("entry", &markers.entry),
      ("counter", &markers.counter),
    ] {
      ensure!(CLASS.is_match(value), error::Marker { name, value });
    }

    ensure!(
      ATTRIBUTE.is_match(&markers.token),
      error::Marker {
        name: "token",
        value: &markers.token,
      }
    );

    ensure!(
      !self.endpoints.token_param.is_empty(),
      error::Marker {
        name: "token_param",
        value: &self.endpoints.token_param,
      }
    );

    for (name, value) in [
      ("vote", &self.endpoints.vote),
      ("unvote", &self.endpoints.unvote),
    ] {
      ensure!(value.starts_with('/'), error::Endpoint { name, value });
    }

    Ok(())
  }
}

/// Class and attribute names the page uses for votable entries.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
  pub button: String,
  pub counter: String,
  pub entry: String,
  pub token: String,
  pub voted: String,
}

impl Default for Markers {
  fn default() -> Self {
    Self {
      button: "upvote".into(),
      counter: "votectr".into(),
      entry: "entry".into(),
      token: "data-votetok".into(),
      voted: "selfvote".into(),
    }
  }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Endpoints {
  pub token_param: String,
  pub unvote: String,
  pub vote: String,
}

impl Default for Endpoints {
  fn default() -> Self {
    Self {
      token_param: "tok".into(),
      unvote: "/unvote/".into(),
      vote: "/vote/".into(),
    }
  }
}

/// What to do with a click on an entry whose previous request hasn't
/// completed yet.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum InFlight {
  /// Issue the request anyway. The last response to arrive wins.
  Allow,
  /// Ignore the click.
  #[default]
  Guard,
}
