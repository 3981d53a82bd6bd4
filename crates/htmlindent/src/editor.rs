//! Rendered/source view toggle over host-provided surfaces
//!
//! Nothing here draws anything. A host integration implements the surface
//! traits and forwards its toolbar button clicks to [`SourceToggle::toggle`].

pub mod surface;
pub mod toggle;

pub use surface::{Highlighter, IconRegistry, RichTextSurface, SourceSurface};
pub use toggle::{
    Mode, SourceToggle, ToggleConfig, SOURCE_EDITOR_ICON, SOURCE_EDITOR_ICON_NAME,
};
