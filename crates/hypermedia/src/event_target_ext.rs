use super::*;

pub trait EventTargetExt {
  fn add_event_listener<E, F>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static;
}

impl<T: Deref<Target = EventTarget>> EventTargetExt for T {
  fn add_event_listener<E, F>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
  {
    let closure = Closure::<dyn FnMut(E)>::new(callback);
    self
      .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
      .map_err(|source| {
        error::Listener {
          event: event_type,
          source,
        }
        .build()
      })?;
    closure.forget();
    Ok(())
  }
}
