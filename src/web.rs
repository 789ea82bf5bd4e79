//! Browser adapters: `web_sys::Element` as [`Element`], [`Api`] as
//! [`Client`], and the document-level click listener.

use {
  super::*,
  hypermedia::{
    wasm_bindgen::JsCast, wasm_bindgen_futures, web_sys, Api, EventTargetExt, StatusCode,
  },
  web_sys::{Document, Event},
};

/// Id of the `<script type="application/json">` element holding page
/// configuration.
pub const CONFIG_ELEMENT_ID: &str = "upvote-config";

impl Element for web_sys::Element {
  fn has_class(&self, class: &str) -> bool {
    self.class_list().contains(class)
  }

  fn add_class(&self, class: &str) {
    if let Err(err) = self.class_list().add_1(class) {
      log::error!("failed to add class `{class}`: {err:?}");
    }
  }

  fn remove_class(&self, class: &str) {
    if let Err(err) = self.class_list().remove_1(class) {
      log::error!("failed to remove class `{class}`: {err:?}");
    }
  }

  fn closest(&self, class: &str) -> Option<Self> {
    web_sys::Element::closest(self, &format!(".{class}"))
      .ok()
      .flatten()
  }

  fn find(&self, class: &str) -> Option<Self> {
    self.query_selector(&format!(".{class}")).ok().flatten()
  }

  fn attribute(&self, name: &str) -> Option<String> {
    self.get_attribute(name)
  }

  fn set_text(&self, text: &str) {
    self.set_text_content(Some(text));
  }
}

impl Client for Api {
  type Error = hypermedia::Error;

  async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Reply, Self::Error> {
    let (status, body): (StatusCode, Vec<u8>) = self.fetch(path, query).await?;

    Ok(Reply {
      status: status.as_u16(),
      body,
    })
  }
}

/// Reads page configuration, falling back to defaults when the page has none.
pub fn load_config(document: &Document) -> Result<Config> {
  Config::load(
    document
      .get_element_by_id(CONFIG_ELEMENT_ID)
      .map(|element| element.text_content().unwrap_or_default())
      .as_deref(),
  )
}

/// Installs the document's single click listener.
pub fn bind<C: Client + 'static>(
  document: &Document,
  binder: Rc<VoteBinder<C>>,
) -> Result<(), hypermedia::Error> {
  document.add_event_listener("click", move |event: Event| {
    let Some(target) = event
      .target()
      .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
      return;
    };

    if let Some(vote) = binder.handle_click(&target) {
      wasm_bindgen_futures::spawn_local(vote);
    }
  })
}
