//! # Raster
//!
//! Software 2D rasterization of lines, circles and polygons onto pixel
//! surfaces, with affine-transformed, cached compositions.
//!
//! Shapes are given in integer pixel coordinates. Each one knows how to write
//! its pixels onto a [`Surface`](surface::Surface), either a dense
//! [`Framebuffer`](framebuffer::Framebuffer) or a
//! [`SparseImage`](sparse::SparseImage). A
//! [`Composition`](composition::Composition) groups shapes, renders them once
//! into a sparse cache and then paints that cache through a translation,
//! rotation, scale or reflection.
//!
//! ## Quick Start
//!
//! ```rust
//! use raster::prelude::*;
//!
//! let diamond = FilledPolygon::new(
//!     [(5, 0), (10, 5), (5, 10), (0, 5)].map(Point::from),
//!     Rgba::WHITE,
//!     Rgba::BLUE,
//! );
//! let scene = Composition::new(Point::new(20, 10), vec![Box::new(diamond)])
//!     .with_transform(Transform::rotate(-45.0));
//!
//! let mut canvas = Framebuffer::new(40, 40)?;
//! scene.draw(&mut canvas);
//!
//! let png = PngEncoder::to_bytes(&canvas)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), raster::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Pure Rust**: no GPU, windowing or native dependencies
//! - **Exact fills**: even-odd scanline fill that never paints over the
//!   outline and handles shared vertices, peaks and flat runs
//! - **Cheap redraws**: compositions render their children once
//! - **PNG output**: any surface can be written to a file or a data URI
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never
//! installs a logger itself.

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and named colors.
pub mod color;

/// Points, rectangles and extent accumulation.
pub mod geometry;

/// Affine transforms over pixel coordinates.
pub mod affine;

// ============================================================================
// Surfaces
// ============================================================================

/// The drawing target abstraction.
pub mod surface;

/// Map-backed pixel storage used as the composition cache.
pub mod sparse;

/// Dense pixel canvas.
pub mod framebuffer;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of lines, circles and polygons.
pub mod render;

/// Cached, transformed groups of drawables.
pub mod composition;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::affine::Transform;
    pub use crate::color::Rgba;
    pub use crate::composition::Composition;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        Circle, Composable, FilledCircle, FilledPolygon, FilledRectangle, Line, Polygon, Square,
    };
    pub use crate::sparse::SparseImage;
    pub use crate::surface::Surface;
}
