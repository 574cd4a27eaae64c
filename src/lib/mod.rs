//! Table of contents generation for markdown documents.
//!
//! A document is loaded from a [`source::Source`], rendered to HTML by a
//! [`render::Renderer`], scanned for anchored headings by
//! [`extract::extract_headings`] and finally turned into a nested markdown
//! list by [`outline::build_outline`].

pub mod config;
pub mod extract;
pub mod outline;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod transformer;
pub mod types;
pub mod utils;
