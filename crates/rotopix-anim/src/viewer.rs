//! File viewer
//!
//! Takes the bytes of a user-selected file, shows the decoded image on a
//! surface and hands back an [`Animator`] for it.

use crate::surface::{DisplaySurface, Placement};
use crate::{AnimResult, AnimationConfig, Animator};
use tracing::{info, warn};

/// Loads files onto a display surface
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    config: AnimationConfig,
}

impl Viewer {
    /// Create a viewer whose animators use `config`.
    pub fn new(config: AnimationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Decode `bytes` and draw the image centered on `surface`.
    ///
    /// The surface is first resized to its host size. On success the
    /// returned animator is idle; call [`Animator::start`] or
    /// [`Animator::run`] to begin rotating.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::Io`](crate::AnimError::Io) if the bytes are not
    /// a decodable PPM stream. Nothing is drawn in that case.
    pub fn load<S: DisplaySurface + ?Sized>(
        &self,
        surface: &mut S,
        file_name: &str,
        bytes: &[u8],
    ) -> AnimResult<Animator> {
        info!(file = file_name, bytes = bytes.len(), "loading image");

        let (width, height) = surface.host_size();
        surface.resize(width, height);

        let image = rotopix_io::decode(bytes).inspect_err(|e| {
            warn!(file = file_name, error = %e, "failed to decode image");
        })?;

        let placement = Placement::centered(surface.size(), &image);
        surface.put_image(&image, placement);
        info!(
            file = file_name,
            width = image.width(),
            height = image.height(),
            x = placement.x,
            y = placement.y,
            "image loaded"
        );

        Animator::new(image, self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnimError, MemorySurface, Phase};
    use rotopix_test::{gradient_payload, ppm_bytes};

    #[test]
    fn test_load_resizes_and_draws() {
        let mut surface = MemorySurface::new(6, 4);
        let bytes = ppm_bytes("P6", 2, 2, 255, &gradient_payload(2, 2));
        let anim = Viewer::default().load(&mut surface, "tiny.ppm", &bytes).unwrap();

        assert_eq!(surface.size(), (6, 4));
        assert_eq!(surface.put_count(), 1);
        assert_eq!(anim.phase(), Phase::Idle);
        // 2x2 image centered at (2, 1)
        assert_eq!(surface.pixel(2, 1), anim.source().get_rgba(0, 0));
        assert_eq!(surface.pixel(3, 2), anim.source().get_rgba(1, 1));
        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_load_failure_draws_nothing() {
        let mut surface = MemorySurface::new(6, 4);
        let err = Viewer::default()
            .load(&mut surface, "broken.ppm", b"P6 2")
            .unwrap_err();
        assert!(matches!(err, AnimError::Io(_)));
        assert_eq!(surface.put_count(), 0);
    }
}
