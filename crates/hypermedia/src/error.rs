use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("page location unavailable: {source:?}"))]
  Location {
    #[snafu(source(false))]
    source: JsValue,
  },
  #[snafu(display("failed to add `{event}` listener: {source:?}"))]
  Listener {
    event: String,
    #[snafu(source(false))]
    source: JsValue,
  },
  #[snafu(display("invalid URL `{input}`"))]
  Parse {
    input: String,
    source: url::ParseError,
  },
  #[snafu(display("request to {url} failed"))]
  Request {
    url: Url,
    source: reqwest::Error,
  },
  WindowMissing,
  DocumentMissing,
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
