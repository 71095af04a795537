//! DOM ids, page texts and canvas limits for the web front-end.

// Element ids in `web/index.html`
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const LOADING_TEXT_ID: &str = "loading-text";
pub const CAMERA_STATUS_ID: &str = "camera-status";
pub const TITLE_ID: &str = "title";

// Page texts
pub const TITLE_TEXT: &str = "MERRY CHRISTMAS TO ZZN";
pub const LOADING_TEXT: &str = "Forging Golden Geometry";
pub const STATUS_LOADING_TEXT: &str = "Igniting Gold...";
pub const STATUS_WAITING_TEXT: &str = "Waiting for Gesture";

// CSS class toggled on overlays
pub const HIDDEN_CLASS: &str = "hidden";

// Device pixel ratio range used for the canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Frame delta clamp so a backgrounded tab doesn't jump the camera
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
