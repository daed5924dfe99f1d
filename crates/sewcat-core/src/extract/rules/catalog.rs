//! Fixed reference catalogs used for matching.
//!
//! Order matters: when several entries match, the one listed first wins.

/// Known pattern companies, in tie-break order.
pub const COMPANIES: &[&str] = &[
    "Simplicity",
    "McCall's",
    "Butterick",
    "Vogue",
    "Kwik Sew",
    "New Look",
    "Burda",
    "Style Arc",
    "Colette",
    "Sewaholic",
    "Grainline",
    "Closet Case",
    "Megan Nielsen",
    "True Bias",
    "Papercut",
    "Jalie",
    "Ottobre",
    "Hey June",
    "Helen's Closet",
];

/// Known fabric types, in reporting order.
pub const FABRICS: &[&str] = &[
    "Cotton",
    "Linen",
    "Silk",
    "Wool",
    "Rayon",
    "Viscose",
    "Polyester",
    "Denim",
    "Chambray",
    "Jersey",
    "Knit",
    "Chiffon",
    "Crepe",
    "Satin",
    "Velvet",
    "Corduroy",
    "Flannel",
    "Fleece",
    "Twill",
    "Voile",
    "Lawn",
    "Poplin",
    "Gabardine",
    "Tencel",
    "Spandex",
    "Lycra",
    "Muslin",
    "Tulle",
    "Lace",
    "Organza",
    "Taffeta",
    "Seersucker",
    "Gingham",
    "Canvas",
];
