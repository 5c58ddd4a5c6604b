use dioxus::prelude::*;
use store::GardenStore;

/// Shared garden data, provided as `Signal<GardenStore>` by the app root.
pub fn use_garden() -> Signal<GardenStore> {
    use_context::<Signal<GardenStore>>()
}

/// Parse the bundled seed, falling back to an empty garden.
pub fn load_garden(seed: &str) -> GardenStore {
    match GardenStore::from_toml(seed) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to load garden seed: {}", e);
            GardenStore::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_seed_falls_back_to_empty() {
        let store = load_garden("[[clients]]\nname = \"A\"\nplants = [\"missing\"]\n");
        assert_eq!(store.clients().count(), 0);
    }

    #[test]
    fn test_good_seed() {
        let store = load_garden("[[clients]]\nname = \"A\"\n");
        assert_eq!(store.clients().count(), 1);
    }
}
