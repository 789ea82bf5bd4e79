use {
  snafu::{OptionExt, ResultExt, Snafu},
  std::ops::Deref,
  url::Url,
  wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast, JsError, JsValue},
  web_sys::{Document, EventTarget, Window},
};

pub use {
  self::{api::Api, error::Error, event_target_ext::EventTargetExt},
  log, reqwest::StatusCode, wasm_bindgen, wasm_bindgen_futures, web_sys,
};

mod api;
mod error;
mod event_target_ext;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}

pub fn window() -> Result<Window, Error> {
  web_sys::window().context(error::WindowMissing)
}

pub fn document() -> Result<Document, Error> {
  window()?.document().context(error::DocumentMissing)
}
