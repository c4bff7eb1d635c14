//! Media Tier Classification Engine
//!
//! Assigns each digital-library record a content tier (0-4) certifying how
//! rich and reusable its media is, before the record is published into the
//! search index. A record is routed to a media-type-specific classifier by
//! its declared EDM type; each classifier applies its rule table per media
//! resource, the result is lowered to the license ceiling, and the record
//! takes the maximum corrected tier over its qualifying resources.
//!
//! The engine is a pure, synchronous computation: no I/O, no shared mutable
//! state, total over all well-formed inputs. Absent or malformed facts
//! degrade to the lowest applicable tier rather than raising an error.

mod audio;
mod classifier;
mod dispatch;
mod image;
mod text;
mod three_d;
mod video;

pub mod embeddable;
pub mod resolution;

// Re-export the public surface
pub use audio::AudioClassifier;
pub use classifier::{MediaClassifier, CLASSIFIABLE_ROLES};
pub use dispatch::classify;
pub use image::ImageClassifier;
pub use text::TextClassifier;
pub use three_d::ThreeDClassifier;
pub use video::VideoClassifier;
