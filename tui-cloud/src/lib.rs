//! Weighted keywords laid out on an animated, hoverable sphere.
//!
//! [`layout::Cloud`] is the entry point: feed it keywords with
//! [`Cloud::build`](layout::Cloud::build), call
//! [`Cloud::tick`](layout::Cloud::tick) once per frame, and draw it with
//! [`project::CloudView`].

pub mod animate;
pub mod config;
pub mod encode;
pub mod hsl;
pub mod interact;
pub mod item;
pub mod layout;
pub mod normalize;
pub mod project;
pub mod sphere;

pub use config::{Camera, CloudConfig, Palette};
pub use item::{Keyword, KeywordResponse, LayoutPoint, RenderItem, Vec3};
pub use layout::{Cloud, Scene};
