/// Page wiring and pointer tuning for the web front-end.
///
/// Element ids must match `index.html`.
pub const CANVAS_ID: &str = "app-canvas";
pub const LANDING_ID: &str = "landing-page";
pub const LAUNCH_BUTTON_ID: &str = "launch-button";
pub const SELECTOR_ID: &str = "selector";
pub const SELECT_ID: &str = "quake-select";

pub const PAGE_TITLE: &str = "Moon Markers 2.0";
pub const LAUNCH_LABEL: &str = "Take me to the moon";
pub const SELECT_LABEL: &str = "Visualise Moon quake on:";

// Served next to index.html
pub const TEXTURE_URL: &str = "/moon_texture.jpg";

// DOM WheelEvent.deltaMode values (0 is pixels)
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

// Wheel travel (in pixels) that counts as one zoom step
pub const WHEEL_PIXELS_PER_STEP: f32 = 100.0;
pub const WHEEL_PIXELS_PER_LINE: f32 = 16.0;
pub const WHEEL_PIXELS_PER_PAGE: f32 = 800.0;
pub const WHEEL_MAX_STEPS_PER_EVENT: f32 = 3.0;
