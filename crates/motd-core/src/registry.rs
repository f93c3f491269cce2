use std::collections::HashMap;

use anyhow::{bail, Result};

use crate::widget::WidgetFactory;

/// Static name-to-factory mapping for widget implementations.
///
/// Built once at startup and handed to the engine by value reference; there
/// is no ambient global table. Registration order is preserved for listing.
pub struct WidgetRegistry {
    names: Vec<&'static str>,
    factories: HashMap<&'static str, WidgetFactory>,
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            factories: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: &'static str, factory: WidgetFactory) -> Result<()> {
        if self.factories.contains_key(name) {
            bail!("duplicate widget type: {}", name);
        }
        self.names.push(name);
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<WidgetFactory> {
        self.factories.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered type names in registration order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
