// Page anchors, class names and timing used by the web front-end.

// Particle background
pub const CANVAS_ID: &str = "neural-bg";

// Typewriter
pub const TYPED_TEXT_ID: &str = "typed-text";
pub const PHRASES: [&str; 4] = [
    "deep learning & biomedical imaging.",
    "computer vision & wearables.",
    "machine learning & data science.",
    "innovative healthcare solutions.",
];

// Navbar
pub const NAVBAR_ID: &str = "navbar";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const NAV_TOGGLE_SELECTOR: &str = ".nav-toggle";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_OPEN_CLASS: &str = "open";

// Scroll reveal
pub const REVEAL_SELECTOR: &str =
    ".about-grid, .timeline-item, .project-card, .skill-category, .contact-card";
pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.15; // fraction of the element in view

// Skill bars
pub const SKILL_FILL_SELECTOR: &str = ".skill-fill";
pub const SKILL_LEVEL_ATTR: &str = "data-level";
pub const SKILL_THRESHOLD: f64 = 0.3;
