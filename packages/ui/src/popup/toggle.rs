//! Binds a [`PopupState`] to live DOM elements through web-sys.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::Object;
use store::PopupConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, MouseEvent, Node};

use super::error::{PopupError, PopupPart};
use super::state::{ClickTarget, Display, PopupEvent, PopupState};

/// Click handlers wired to one popup's container, open trigger and close
/// control, plus a window-level handler for backdrop clicks.
///
/// The listeners stay attached for as long as the value lives and are
/// removed when it is dropped.
pub struct PopupToggle {
    popup: Rc<BoundPopup>,
    _listeners: Vec<ClickListener>,
}

impl PopupToggle {
    /// Binds to the elements named by `config` in the current window's document.
    pub fn bind_document(config: &PopupConfig) -> Result<Self, PopupError> {
        let window = web_sys::window().ok_or(PopupError::NoWindow)?;
        let document = window.document().ok_or(PopupError::NoDocument)?;
        Self::bind(&document, config)
    }

    /// Looks up all three elements first and attaches nothing unless every
    /// one of them is present. Only the first element carrying the close
    /// class is bound.
    pub fn bind(document: &Document, config: &PopupConfig) -> Result<Self, PopupError> {
        let container_selector = format!("#{}", config.container_id);
        let container = document
            .get_element_by_id(&config.container_id)
            .ok_or_else(|| PopupError::MissingElement {
                part: PopupPart::Container,
                selector: container_selector.clone(),
            })?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PopupError::NotHtmlElement {
                part: PopupPart::Container,
                selector: container_selector,
            })?;

        let trigger = document
            .get_element_by_id(&config.trigger_id)
            .ok_or_else(|| PopupError::MissingElement {
                part: PopupPart::Trigger,
                selector: format!("#{}", config.trigger_id),
            })?;

        let close = document
            .get_elements_by_class_name(&config.close_class)
            .item(0)
            .ok_or_else(|| PopupError::MissingElement {
                part: PopupPart::CloseControl,
                selector: format!(".{}", config.close_class),
            })?;

        let window: EventTarget = document.default_view().ok_or(PopupError::NoWindow)?.into();

        let initial = container
            .style()
            .get_property_value("display")
            .map(|value| Display::from_css(&value))
            .unwrap_or_default();
        let popup = Rc::new(BoundPopup {
            container,
            state: Cell::new(PopupState::new(initial)),
        });

        let listeners = vec![
            ClickListener::attach(trigger.into(), "open trigger", {
                let popup = popup.clone();
                move |_| popup.dispatch(PopupEvent::TriggerClicked)
            })?,
            ClickListener::attach(close.into(), "close control", {
                let popup = popup.clone();
                move |_| popup.dispatch(PopupEvent::CloseClicked)
            })?,
            ClickListener::attach(window, "window", {
                let popup = popup.clone();
                move |event: MouseEvent| {
                    let target = popup.classify(event.target());
                    popup.dispatch(PopupEvent::WindowClicked(target));
                }
            })?,
        ];

        tracing::debug!("bound popup #{}", config.container_id);
        Ok(Self {
            popup,
            _listeners: listeners,
        })
    }

    /// Last display value written by a handler, or the one read at bind time.
    pub fn display(&self) -> Display {
        self.popup.state.get().display()
    }
}

struct BoundPopup {
    container: HtmlElement,
    state: Cell<PopupState>,
}

impl BoundPopup {
    fn dispatch(&self, event: PopupEvent) {
        let mut state = self.state.get();
        if let Some(display) = state.handle(event) {
            if let Err(err) = self
                .container
                .style()
                .set_property("display", display.as_css())
            {
                tracing::error!("failed to set popup display: {:?}", err);
            }
            tracing::debug!(?event, "popup display set to {display}");
        }
        self.state.set(state);
    }

    /// Identity comparison against the container; containment only separates
    /// inner content from the rest of the page.
    fn classify(&self, target: Option<EventTarget>) -> ClickTarget {
        let Some(target) = target else {
            return ClickTarget::Outside;
        };
        if Object::is(target.as_ref(), self.container.as_ref()) {
            ClickTarget::Container
        } else if self.container.contains(target.dyn_ref::<Node>()) {
            ClickTarget::Descendant
        } else {
            ClickTarget::Outside
        }
    }
}

struct ClickListener {
    target: EventTarget,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl ClickListener {
    fn attach(
        target: EventTarget,
        name: &'static str,
        handler: impl FnMut(MouseEvent) + 'static,
    ) -> Result<Self, PopupError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
        target
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|err| PopupError::Listen {
                target: name,
                reason: format!("{err:?}"),
            })?;
        Ok(Self { target, callback })
    }
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}
