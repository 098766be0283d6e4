//! Internal constants for diagram rendering.

/// Output format requested from Kroki and used as the image file extension.
pub const IMAGE_FORMAT: &str = "svg";

/// Meta attribute holding the image alt text.
pub const ALT_ATTR: &str = "imgAlt";

/// Meta attribute holding the image title.
pub const TITLE_ATTR: &str = "imgTitle";

/// Meta attribute naming the Kroki diagram type for native-language blocks.
pub const TYPE_ATTR: &str = "imgType";
