//! Game-over overlay: "<name> Wins!" plus a Play Again button

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

pub struct Overlay {
    body: HtmlElement,
    container: HtmlElement,
    title: HtmlElement,
    button: HtmlElement,
    shown: bool,
}

impl Overlay {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("Document has no body"))?;

        let container = create_element(document, "div")?;
        container.class_list().add_1("game-over-container")?;

        let panel = create_element(document, "div")?;
        panel.class_list().add_1("game-over-box")?;

        let title = create_element(document, "h1")?;

        let button = create_element(document, "button")?;
        button.set_text_content(Some("Play Again"));

        panel.append_child(&title)?;
        panel.append_child(&button)?;
        container.append_child(&panel)?;

        Ok(Self {
            body,
            container,
            title,
            button,
            shown: false,
        })
    }

    /// The Play Again button, for wiring its click handler
    pub fn button(&self) -> &HtmlElement {
        &self.button
    }

    pub fn show(&mut self, winner_name: &str) -> Result<(), JsValue> {
        self.title
            .set_text_content(Some(&format!("{} Wins!", winner_name)));
        if !self.shown {
            self.body.append_child(&self.container)?;
            self.shown = true;
        }
        Ok(())
    }

    pub fn hide(&mut self) -> Result<(), JsValue> {
        if self.shown {
            self.body.remove_child(&self.container)?;
            self.shown = false;
        }
        Ok(())
    }
}

fn create_element(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(document.create_element(tag)?.dyn_into::<HtmlElement>()?)
}
