use {
  hypermedia::{
    log,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsValue},
    wasm_bindgen_futures, Api,
  },
  std::rc::Rc,
  upvote::{web, VoteBinder},
};

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  let document = hypermedia::document()?;
  let config = web::load_config(&document)?;
  hypermedia::initialize_console(config.log_level)?;
  let binder = Rc::new(VoteBinder::new(config, Api::new()?));
  web::bind(&document, binder)?;
  log::debug!("vote listener bound");
  Ok(())
}
