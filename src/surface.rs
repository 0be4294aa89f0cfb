use vmap_core::MapSurface;

/// Stand-in for the browser map widget: records overlay registrations and
/// the set of active layers instead of rendering anything.
#[derive(Debug, Default)]
pub struct HeadlessMapSurface {
    pub registered: Vec<(String, String)>,
    pub active: Vec<String>,
}

impl MapSurface for HeadlessMapSurface {
    fn register_overlay(&mut self, key: &str, label: &str) {
        log::debug!("Overlay registered: {key} ({label})");
        self.registered.push((key.to_string(), label.to_string()));
    }

    fn add_layer(&mut self, key: &str) {
        if !self.active.iter().any(|k| k == key) {
            self.active.push(key.to_string());
        }
    }

    fn remove_layer(&mut self, key: &str) {
        self.active.retain(|k| k != key);
    }
}
