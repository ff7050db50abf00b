// Particle-network tuning constants shared by the field and its tests.

// Population
pub const AREA_PER_PARTICLE: f64 = 12_000.0; // surface px² per particle
pub const MAX_INITIAL_SPEED: f64 = 0.4; // per-axis, px per frame
pub const RADIUS_MIN: f64 = 1.0;
pub const RADIUS_MAX: f64 = 3.5;

// Links
pub const LINK_DISTANCE: f64 = 160.0; // px; pairs at or beyond this are not linked
pub const LINK_MAX_ALPHA: f64 = 0.25; // opacity of a zero-length link
pub const LINK_WIDTH: f64 = 0.8;

// Pulse
pub const CLOCK_STEP: f64 = 0.01; // per frame, not wall-clock
pub const PULSE_RATE: f64 = 2.0;
pub const PULSE_AMPLITUDE: f64 = 0.5; // pulse = sin(..) * amplitude + 1
pub const GLOW_SCALE: f64 = 2.0; // halo radius relative to the core disc

// Pointer interaction
pub const POINTER_RADIUS: f64 = 200.0;
pub const POINTER_PULL: f64 = 0.001; // fraction of the offset applied per frame

// Accent palette
pub const PRIMARY_RGB: [u8; 3] = [108, 99, 255];
pub const SECONDARY_RGB: [u8; 3] = [0, 212, 170];
pub const PRIMARY_CORE_ALPHA: f64 = 0.8;
pub const SECONDARY_CORE_ALPHA: f64 = 0.7;
pub const PRIMARY_GLOW_ALPHA: f64 = 0.15;
pub const SECONDARY_GLOW_ALPHA: f64 = 0.12;
