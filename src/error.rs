use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("invalid configuration"))]
  Config { source: serde_json::Error },
  #[snafu(display("response to `{request}` is not a valid tally"))]
  Deserialize {
    request: String,
    source: serde_json::Error,
  },
  #[snafu(display("{name} endpoint `{value}` must be an absolute path"))]
  Endpoint { name: &'static str, value: String },
  #[snafu(display("{name} marker `{value}` is not a valid identifier"))]
  Marker { name: &'static str, value: String },
  #[snafu(display("response to `{request}` failed with status {status}"))]
  Status { request: String, status: u16 },
  #[snafu(display("request `{request}` failed"))]
  Transport {
    request: String,
    source: Box<dyn std::error::Error>,
  },
}

impl Error {
  pub(crate) fn log(&self) {
    let mut message = self.to_string();

    for err in self.iter_chain().skip(1) {
      message.push_str(": ");
      message.push_str(&err.to_string());
    }

    match self {
      Self::Status { .. } => log::debug!("{message}"),
      Self::Transport { .. } => log::warn!("{message}"),
      _ => log::error!("{message}"),
    }
  }
}

impl From<Error> for hypermedia::wasm_bindgen::JsValue {
  fn from(err: Error) -> Self {
    hypermedia::wasm_bindgen::JsError::new(&err.to_string()).into()
  }
}
