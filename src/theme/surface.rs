use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsValue;

use super::types::Theme;

/// An element whose class list mirrors the active theme.
///
/// Implementations are shared handles: clones observe the same classes.
pub trait ClassSurface {
    fn add_class(&self, name: &str);
    fn remove_class(&self, name: &str);
    fn has_class(&self, name: &str) -> bool;
}

/// Replace whichever theme token is present with the one for `theme`.
///
/// Only the two theme tokens are touched; every other class is left alone.
pub fn sync_theme_classes(surface: &dyn ClassSurface, theme: Theme) {
    for reserved in Theme::ALL {
        surface.remove_class(reserved.class_name());
    }
    surface.add_class(theme.class_name());
}

/// The `<html>` element of the current document.
#[derive(Clone)]
pub struct DocumentRoot {
    element: web_sys::Element,
}

impl DocumentRoot {
    /// Returns `None` when the window has no document element.
    #[cfg(target_arch = "wasm32")]
    pub fn locate() -> Option<Self> {
        let element = web_sys::window()?.document()?.document_element()?;
        Some(Self { element })
    }

    /// There is no DOM off wasm.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn locate() -> Option<Self> {
        None
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl ClassSurface for DocumentRoot {
    fn add_class(&self, name: &str) {
        if let Err(e) = self.element.class_list().add_1(name) {
            warn!(class = name, error = %js_error_message(&e), "Failed to add class to document root");
        }
    }

    fn remove_class(&self, name: &str) {
        if let Err(e) = self.element.class_list().remove_1(name) {
            warn!(class = name, error = %js_error_message(&e), "Failed to remove class from document root");
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.element.class_list().contains(name)
    }
}

/// An ordered, duplicate-free class list kept in memory.
///
/// Stands in for the document root when no DOM is available.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    classes: Rc<RefCell<Vec<String>>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let surface = Self::new();
        for class in classes {
            surface.add_class(&class.into());
        }
        surface
    }

    /// Snapshot of the current classes in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }
}

impl ClassSurface for MemorySurface {
    fn add_class(&self, name: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == name) {
            classes.push(name.to_string());
        }
    }

    fn remove_class(&self, name: &str) {
        self.classes.borrow_mut().retain(|c| c != name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == name)
    }
}
