use dioxus::logger::tracing::error;
use forum_core::{HostPage, RenderError};
use web_sys::{window, Document};

/// The browser document the app is loaded into.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn current() -> Result<Self, RenderError> {
        window()
            .and_then(|window| window.document())
            .map(|document| Self { document })
            .ok_or(RenderError::NoDocument)
    }

    /// Replaces the whole body with an error message.
    fn show_error(&self, message: &str) {
        if let Some(body) = self.document.body() {
            body.set_inner_html("");
            let paragraph = match self.document.create_element("p") {
                Ok(paragraph) => paragraph,
                Err(_) => return,
            };
            let _ = paragraph.set_attribute("style", "color: #f14668; font-weight: bold;");
            paragraph.set_text_content(Some(message));
            let _ = body.append_child(&paragraph);
        }
    }
}

impl HostPage for DomPage {
    fn has_mount(&self, mount_id: &str) -> bool {
        self.document.get_element_by_id(mount_id).is_some()
    }
}

/// Shows `err` in the page, when there is one, and aborts startup.
pub fn report_fatal(page: Option<&DomPage>, err: &RenderError) -> ! {
    let message = format!("Cannot render forum: {}", err);
    error!("{}", message);
    if let Some(page) = page {
        page.show_error(&message);
    }
    wasm_bindgen::throw_str(&message)
}
