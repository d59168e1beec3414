//! Settings service
//!
//! Manages the theme preference stored under its own key.

use crate::config::THEME_KEY;
use crate::error::Result;
use crate::models::Theme;
use crate::storage::KeyValueStore;
use std::sync::Arc;

/// Service for managing the theme preference
#[derive(Clone)]
pub struct ThemeService {
    kv: Arc<dyn KeyValueStore>,
}

impl ThemeService {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the stored theme, dark if absent or unreadable
    pub async fn load(&self) -> Theme {
        match self.kv.get(THEME_KEY).await {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                tracing::warn!("Failed to read theme, using default: {}", e);
                Theme::default()
            }
        }
    }

    /// Save the theme
    pub async fn save(&self, theme: Theme) -> Result<()> {
        self.kv.set(THEME_KEY, theme.as_str()).await?;
        tracing::info!("Theme set to {}", theme);
        Ok(())
    }

    /// Switch between dark and light, returning the new theme
    pub async fn toggle(&self) -> Result<Theme> {
        let theme = self.load().await.toggled();
        self.save(theme).await?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn create_test_service() -> (ThemeService, MemoryStore) {
        let kv = MemoryStore::new();
        (ThemeService::new(Arc::new(kv.clone())), kv)
    }

    #[tokio::test]
    async fn test_default_theme_is_dark() {
        let (service, _kv) = create_test_service();
        assert_eq!(service.load().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_toggle_persists() {
        let (service, kv) = create_test_service();

        assert_eq!(service.toggle().await.unwrap(), Theme::Light);
        assert_eq!(kv.get(THEME_KEY).await.unwrap().as_deref(), Some("light"));

        assert_eq!(service.toggle().await.unwrap(), Theme::Dark);
        assert_eq!(service.load().await, Theme::Dark);
    }

    #[tokio::test]
    async fn test_unknown_value_falls_back_to_dark() {
        let (service, kv) = create_test_service();
        kv.set(THEME_KEY, "solarized").await.unwrap();

        assert_eq!(service.load().await, Theme::Dark);
    }
}
