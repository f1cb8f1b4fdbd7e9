// DOM hooks the page markup provides.

// Reveal-on-view targets and the class they receive
pub const REVEAL_SELECTOR: &str = "[data-parallax]";
pub const VISIBLE_CLASS: &str = "visible";
pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index"; // set on each observed element

// Particle field
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";

// Motion preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Parallax sections, resolved once at load
pub const PARALLAX_SELECTOR: &str = ".geometry, .mindset-split, .process-step, .quote-wrap, .final-cta";

// Links eligible for smooth in-page scrolling
pub const ANCHOR_LINK_SELECTOR: &str = "nav a, .footer a";
