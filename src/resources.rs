//! Resolving resource identifiers to star images
//!
//! The rating bar never looks images up on its own. Hosts inject a
//! [`ResourceResolver`] at construction time, and the widget asks it whenever
//! an image is set by [`ResourceId`].

use serde::{Deserialize, Serialize};

use crate::ui::components::StarImage;

/// Opaque handle to an image owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u16);

/// Looks up images by resource identifier
pub trait ResourceResolver {
    /// Returns the image for `id`, or `None` if the host has no such resource.
    fn resolve(&self, id: ResourceId) -> Option<StarImage>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for &R {
    fn resolve(&self, id: ResourceId) -> Option<StarImage> {
        (**self).resolve(id)
    }
}

/// Resolver for hosts without any image resources
///
/// Every lookup fails, so the built-in stars are always used.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceResolver for NoResources {
    fn resolve(&self, _id: ResourceId) -> Option<StarImage> {
        None
    }
}

/// Fixed-capacity resource table
///
/// # Type Parameters
/// - `N`: Maximum number of registered images (compile-time constant)
///
/// # Examples
/// ```ignore
/// let mut resources = StaticResources::<4>::new();
/// resources.register(HEART, StarImage::Mask(heart_mask))?;
/// let bar = RatingBar::new(config, resources)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticResources<const N: usize> {
    entries: heapless::Vec<(ResourceId, StarImage), N>,
}

impl<const N: usize> StaticResources<N> {
    pub fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
        }
    }

    /// Register `image` under `id`, replacing any earlier image with that id.
    ///
    /// # Returns
    /// - `Ok(())`: Image registered
    /// - `Err((id, image))`: Table is full (reached capacity N)
    pub fn register(
        &mut self,
        id: ResourceId,
        image: StarImage,
    ) -> Result<(), (ResourceId, StarImage)> {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            entry.1 = image;
            return Ok(());
        }
        self.entries.push((id, image))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> ResourceResolver for StaticResources<N> {
    fn resolve(&self, id: ResourceId) -> Option<StarImage> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, image)| *image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_resources_never_resolves() {
        assert_eq!(NoResources.resolve(ResourceId(0)), None);
    }

    #[test]
    fn test_static_resources_lookup_and_replace() {
        let mut resources = StaticResources::<2>::new();
        resources
            .register(ResourceId(1), StarImage::OutlineStar)
            .unwrap();
        assert_eq!(resources.resolve(ResourceId(1)), Some(StarImage::OutlineStar));
        assert_eq!(resources.resolve(ResourceId(2)), None);

        resources
            .register(ResourceId(1), StarImage::FilledStar)
            .unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources.resolve(ResourceId(1)), Some(StarImage::FilledStar));
    }

    #[test]
    fn test_static_resources_capacity() {
        let mut resources = StaticResources::<1>::new();
        assert!(resources.register(ResourceId(1), StarImage::FilledStar).is_ok());
        assert_eq!(
            resources.register(ResourceId(2), StarImage::OutlineStar),
            Err((ResourceId(2), StarImage::OutlineStar))
        );
    }
}
